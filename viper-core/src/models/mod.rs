pub mod mutation;
pub mod window;

// re-export for cleaner imports
pub use self::mutation::MutationRecord;
pub use self::window::DensityWindow;

use clap::{Command, arg};

pub const VCF_CMD: &str = "vcf";

pub fn create_vcf_cli() -> Command {
    Command::new(VCF_CMD)
        .author("Viper")
        .about("Call SNPs from a multiple sequence alignment and write them as VCF.")
        .arg(
            arg!(--reference <REFERENCE>)
                .required(true)
                .help("Path to reference FASTA; the first record is used"),
        )
        .arg(
            arg!(--alignment <ALIGNMENT>)
                .required(true)
                .help("Path to multi-FASTA of sequences aligned to the reference"),
        )
        .arg(
            arg!(--output <OUTPUT>)
                .required(true)
                .help("Path to output VCF file"),
        )
}

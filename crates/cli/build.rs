use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("paperchase")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Download conference papers from proceedings listing pages")
        .arg(
            clap::arg!(--delay <MS> "Pause between downloads in milliseconds")
                .visible_alias("timeout")
                .default_value("2000"),
        )
        .arg(
            clap::arg!(-c --config <FILE> "JSON file listing conferences")
                .default_value("conferences.json")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-o --output_dir <DIR> "Output directory for storing papers")
                .default_value("papers")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--scholar_url <URL> "Search endpoint used for title-only listings"))
        .arg(
            clap::arg!(--completions <SHELL> "Print a shell completion script and exit")
                .value_parser(["bash", "zsh", "fish", "powershell", "elvish"]),
        )
        .arg(clap::arg!(-v --verbose "Enable debug logging"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "paperchase", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "paperchase", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "paperchase", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "paperchase", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}

use clap::Parser;
use domset::application::{
    parse_min_entries, BuildOptions, BuildService, CustomizeService, FilelistService,
};
use domset::cli::{format_build_report, format_customize_report, Cli, Commands};
use domset::error::DomsetError;
use domset::infrastructure::CustomizationConfig;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), DomsetError> {
    match cli.command {
        Commands::Build {
            source_dir,
            release_dir,
            min_lines,
            tag_policy,
        } => {
            let options = BuildOptions {
                source_dir,
                release_dir,
                min_entries: parse_min_entries(&min_lines),
                tag_policy_path: tag_policy.clone(),
            };

            let report = BuildService::execute(&options)?;
            if !report.policy_loaded {
                println!(
                    "Tag policy file not found, skipping tag output: {}",
                    tag_policy.display()
                );
            }
            print!("{}", format_build_report(&report));
            Ok(())
        }
        Commands::Customize { source_dir, config } => {
            if !source_dir.is_dir() {
                return Err(DomsetError::SourceDirNotFound(source_dir));
            }

            match CustomizationConfig::load(&config)? {
                Some(rules) => {
                    let report = CustomizeService::execute(&source_dir, &rules)?;
                    print!("{}", format_customize_report(&report));
                }
                None => {
                    println!(
                        "Customization file not found, skipping pre-processing: {}",
                        config.display()
                    );
                }
            }
            Ok(())
        }
        Commands::Filelist {
            release_dir,
            output_dir,
            repo_name,
            index,
        } => {
            let report = FilelistService::execute(
                &release_dir,
                &output_dir,
                &repo_name,
                index.as_deref(),
            )?;
            println!("Generated {}", report.file_list_path.display());
            if report.index_copied {
                println!("Copied index.html");
            }
            println!("Listed {} files", report.files);
            Ok(())
        }
    }
}

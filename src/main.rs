// Copyright 2025 binvoke contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use binvoke::commands::list::ListCommand;
use binvoke::commands::run::RunCommand;
use binvoke::commands::which::WhichCommand;
use binvoke::error::{Result, format_error_chain, format_error_with_color, get_exit_code};
use binvoke::logging;
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "binvoke")]
#[command(author, version, about = "Prebuilt binary resolver and launcher", long_about = None)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a package's binary and launch it
    Run {
        /// Package whose binary should be launched
        package: String,

        /// Acceptable executable names in priority order (defaults to the
        /// package name)
        #[arg(short = 'n', long = "name", value_name = "NAME")]
        names: Vec<String>,

        /// Storage root containing downloaded binaries
        #[arg(long, value_name = "DIR")]
        base: Option<PathBuf>,

        /// Resolve for a raw platform token instead of the current host
        #[arg(long, value_name = "PLATFORM")]
        platform: Option<String>,

        /// Resolve for a raw architecture token instead of the current host
        #[arg(long, value_name = "ARCH")]
        arch: Option<String>,

        /// Arguments after `--`, forwarded verbatim to the binary
        #[arg(last = true)]
        args: Vec<OsString>,
    },

    /// Print the path of a package's binary
    Which {
        /// Package whose binary should be located
        package: String,

        /// Acceptable executable names in priority order (defaults to the
        /// package name)
        #[arg(short = 'n', long = "name", value_name = "NAME")]
        names: Vec<String>,

        /// Storage root containing downloaded binaries
        #[arg(long, value_name = "DIR")]
        base: Option<PathBuf>,

        /// Resolve for a raw platform token instead of the current host
        #[arg(long, value_name = "PLATFORM")]
        platform: Option<String>,

        /// Resolve for a raw architecture token instead of the current host
        #[arg(long, value_name = "ARCH")]
        arch: Option<String>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// List packages present under the storage root
    #[command(visible_alias = "ls")]
    List {
        /// Storage root containing downloaded binaries
        #[arg(long, value_name = "DIR")]
        base: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    logging::setup_logger(cli.verbose);

    let is_launch = matches!(cli.command, Commands::Run { .. });

    let result: Result<()> = (|| {
        match cli.command {
            Commands::Run {
                package,
                names,
                base,
                platform,
                arch,
                args,
            } => {
                let command = RunCommand::new(base, platform, arch)?;
                command.execute(&package, &names, args)
            }
            Commands::Which {
                package,
                names,
                base,
                platform,
                arch,
                json,
            } => {
                let command = WhichCommand::new(base, platform, arch)?;
                command.execute(&package, &names, json)
            }
            Commands::List { base } => {
                let command = ListCommand::new(base)?;
                command.execute()
            }
        }
    })();

    if let Err(e) = result {
        if is_launch {
            // Launch failures are the user-facing surface; give them the
            // full diagnostic treatment.
            let use_color = std::io::stderr().is_terminal();
            eprint!("{}", format_error_with_color(&e, use_color));
        } else {
            eprintln!("{}", format_error_chain(&e));
        }
        std::process::exit(get_exit_code(&e));
    }
}

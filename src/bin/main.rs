/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

/*
 * Copyright 2020 Zachary Schneider
 */

use std::io::Write;
use std::path::PathBuf;

use anyhow::Error;
use chrono::Local;
use clap::{value_parser, Arg, ArgAction, Command};
use env_logger::{Builder, Env, Target};
use log::{error, Record};

use tee::app::Tee;
use tee::config::Options;

fn init_logger() {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .target(Target::Stderr)
        .format(|buf, record: &Record| {
            let now = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");

            writeln!(buf, "{} [{:5}] {}", now, record.level(), record.args())
        })
        .init();
}

fn options() -> Options {
    let matches = Command::new("tee")
        .version("1.0")
        .author("Zachary Schneider <sigil.66@gmail.com>")
        .about("Copy standard input to standard output and files")
        .arg(
            Arg::new("append")
                .short('a')
                .long("append")
                .action(ArgAction::SetTrue)
                .help("Append to the given files, do not overwrite"),
        )
        .arg(
            Arg::new("digest")
                .short('d')
                .long("digest")
                .action(ArgAction::SetTrue)
                .help("Print the SHA3-256 digest of the input to stderr"),
        )
        .arg(
            Arg::new("zstd")
                .short('z')
                .long("zstd")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Also write a zstd compressed copy to FILE"),
        )
        .arg(
            Arg::new("files")
                .value_name("FILE")
                .num_args(0..)
                .value_parser(value_parser!(PathBuf)),
        )
        .get_matches();

    let mut opts = Options::new()
        .append(matches.get_flag("append"))
        .digest(matches.get_flag("digest"));

    if let Some(files) = matches.get_many::<PathBuf>("files") {
        opts.files = files.cloned().collect();
    }

    opts.zstd = matches.get_one::<PathBuf>("zstd").cloned();
    opts
}

fn run() -> Result<(), Error> {
    let tee = Tee::new(options());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    if let Some(digest) = tee.run(&mut stdin.lock(), &mut stdout.lock())? {
        eprintln!("{}", digest);
    }

    Ok(())
}

fn main() {
    init_logger();

    if let Err(err) = run() {
        error!("{:#}", err);
        std::process::exit(1);
    }
}

use std::io::{self, BufRead, Write};

use clap::Parser;
use inventory::{
    Catalog,
    command::{self, Command},
    config::Config,
};
use log::{error, info, trace};

fn main() -> io::Result<()> {
    env_logger::builder().init();

    let config = Config::parse();
    trace!("{config:#?}");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "**********************************")?;
    writeln!(out, "AMAZON INVENTORY MANAGEMENT SYSTEM")?;
    writeln!(out, "**********************************")?;
    writeln!(out, "LOADING THE INVENTORY FROM: {}", config.csv_path.display())?;

    let mut catalog = Catalog::new();
    let stats = match catalog.load_csv_file(&config.csv_path) {
        Ok(stats) => stats,
        Err(e) => {
            error!("{e}");
            eprintln!("FAILED TO LOAD. EXITING.");
            std::process::exit(1);
        }
    };
    info!(
        "{} products, {} distinct ids, {} categories",
        catalog.len(),
        catalog.indexed_len(),
        catalog.category_count()
    );
    writeln!(out, "LOADED {} PRODUCTS.", stats.loaded)?;
    command::print_help(&mut out)?;

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            trace!(target: "repl", "stdin: EOF");
            break;
        }

        let cmd = Command::parse(&line);
        trace!(target: "repl", "{cmd:?}");
        command::execute(&catalog, &cmd, &mut out)?;
        if cmd == Command::Exit {
            break;
        }
    }

    writeln!(out, "THANK YOU FOR USING OUR SERVICES !")
}

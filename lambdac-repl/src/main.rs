mod cli;
mod commands;
mod driver;
mod input;
mod macros;

use std::io;

use cli::Cli;
use commands::Session;

fn main() {
    let cli = Cli::init();
    simple_logger::init_with_level(cli.log_level().to_level().unwrap_or(log::Level::Warn))
        .expect("failed to install logger");

    let mut session = Session::new(cli.cc.clone(), cli.keep_c);

    if let Some(script_path) = &cli.script {
        match std::fs::read_to_string(script_path) {
            Ok(contents) => session.input.push_file(&contents),
            Err(err) => {
                eprintln!("Failed: {err}");
                std::process::exit(1);
            }
        }
        run_queued(&mut session);
    } else {
        run_interactive(&mut session);
    }
}

/// Drain whatever was queued by `--script` (or `:o`), then exit.
fn run_queued(session: &mut Session) {
    let stdin = io::stdin();
    let mut count = 0;

    while !session.should_quit {
        count += 1;
        let Some(line) = pop_queued(session) else {
            break;
        };
        log::trace!("script line {count}: {line:?}");
        session.run_line(&stdin, &line);
    }
}

fn pop_queued(session: &mut Session) -> Option<String> {
    // `Session` only exposes its queue via `input`; reuse the same
    // continuation-free single-line pop a plain stdin read would use.
    session.input.pop_immediate()
}

fn run_interactive(session: &mut Session) {
    use std::io::Write;

    let stdin = io::stdin();
    let mut count = 0;

    while !session.should_quit {
        count += 1;

        if let Some(queued) = session.input.pop_immediate() {
            session.run_line(&stdin, &queued);
            continue;
        }

        print!("{count} > ");
        let _ = io::stdout().flush();

        let mut buf = String::new();
        match stdin.read_line(&mut buf) {
            Ok(0) => {
                // EOF behaves like an explicit :q
                session.should_quit = true;
            }
            Ok(_) => {
                let line = buf.strip_suffix('\n').unwrap_or(&buf).to_string();
                session.run_line(&stdin, &line);
            }
            Err(err) => {
                eprintln!("Failed: {err}");
                session.should_quit = true;
            }
        }
    }

    println!("Goodbye!");
}

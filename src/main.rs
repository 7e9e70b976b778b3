extern crate anyhow;
extern crate clap;
extern crate thiserror;
extern crate voxell_rng;

#[macro_export]
macro_rules! if_tracing {
    {$($body:tt)*} => {
        ::cfg_if::cfg_if! {
            if #[cfg(feature = "tracing")] {
                $($body)*
            }
        }
    };
}

#[macro_export]
macro_rules! if_not_tracing {
    {$($body:tt)*} => {
        ::cfg_if::cfg_if! {
            if #[cfg(not(feature = "tracing"))] {
                $($body)*
            }
        }
    };
}

if_tracing! {
    use tracing_subscriber::{EnvFilter, fmt};
}

use crate::{
    cli::Cli,
    error::{ErrorKind, GlitchError},
};
use clap::Parser;
use std::process;

mod cli;
mod error;
mod glitch;
mod rng;
#[cfg(test)]
mod tests;

fn main() {
    if_tracing! {
        let subscriber = fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_target(false)
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    }

    let cli = Cli::parse();
    match cli::glitch::glitch(&cli) {
        Ok(message) => println!("{}", message),
        Err(e) => {
            eprintln!("error: {:#}", e);
            process::exit(exit_code(&e));
        }
    }
}

/// sysexits-style status per failure kind, 1 for anything that is not a [`GlitchError`].
fn exit_code(e: &anyhow::Error) -> i32 {
    match e.downcast_ref::<GlitchError>().map(GlitchError::kind) {
        Some(ErrorKind::Read) => 66,
        Some(ErrorKind::InvalidInput) => 65,
        Some(ErrorKind::Write) => 73,
        None => 1,
    }
}

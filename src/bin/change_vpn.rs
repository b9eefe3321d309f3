use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use log::error;

use screen_chores::{
    config::AppConfig,
    input::{AutoGuiDesktop, Desktop, DryRunDesktop},
    screen_access,
    vpn::VpnChanger,
    VpnError,
};

/// Rotate the VPN client to its next server location by clicking through its window.
#[derive(Parser, Debug)]
#[command(name = "change_vpn", version)]
struct Cli {
    /// How many rotations to run in this process; each scrolls one step further
    #[arg(long, default_value_t = 1)]
    rotations: u32,

    /// Log the clicks instead of performing them
    #[arg(long)]
    dry_run: bool,

    /// INI file with [vpn] and [timing] sections
    #[arg(long)]
    config: Option<PathBuf>,
}

fn rotate(changer: &mut VpnChanger, desktop: &mut dyn Desktop, rotations: u32) -> Result<(), VpnError> {
    for _ in 0..rotations {
        println!("Changing VPN...");
        changer.change_vpn(desktop)?;
        println!("VPN changed successfully.");
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load_or_default(cli.config.as_deref())?;
    let mut changer = VpnChanger::new(config.vpn);

    if cli.dry_run {
        rotate(&mut changer, &mut DryRunDesktop, cli.rotations)?;
        return Ok(());
    }

    changer.validate_within(screen_access::primary_area()?)?;
    let mut desktop = AutoGuiDesktop::new()?;
    rotate(&mut changer, &mut desktop, cli.rotations)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

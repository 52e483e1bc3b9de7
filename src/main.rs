use anyhow::Result;
use clap::{Parser, Subcommand};

use peerlink::cli::{
    handle_file_command, handle_invite_command, handle_keygen_command, handle_message_command,
    FileCommands, InviteCommands, MessageCommands,
};
use peerlink::config::{paths::PeerlinkPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "peerlink",
    version,
    about = "Authenticated encryption and invite codes for PeerLink transfers",
    long_about = "PeerLink encrypts messages and files with AES-256-GCM using a shared \
                  base64 key, and generates invite codes for handing a transfer to a peer."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new random encryption key
    Keygen,

    #[command(flatten)]
    Message(MessageCommands),

    #[command(flatten)]
    File(FileCommands),

    /// Invite code and invite payload commands
    #[command(subcommand)]
    Invite(InviteCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = PeerlinkPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    peerlink::logging::init(&settings);

    match cli.command {
        Some(Commands::Keygen) => handle_keygen_command()?,
        Some(Commands::Message(cmd)) => handle_message_command(cmd)?,
        Some(Commands::File(cmd)) => handle_file_command(&settings, cmd)?,
        Some(Commands::Invite(cmd)) => handle_invite_command(cmd)?,
        Some(Commands::Config) => {
            println!("PeerLink Configuration");
            println!("======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Log filter:  {}", settings.log_filter);
            println!("  JSON logs:   {}", settings.log_json);
            println!("  Armor files: {}", settings.armor_files);
        }
        None => {
            println!("PeerLink - encrypted peer-to-peer sharing");
            println!();
            println!("Run 'peerlink --help' for usage information.");
            println!("Run 'peerlink keygen' to create a key.");
        }
    }

    Ok(())
}

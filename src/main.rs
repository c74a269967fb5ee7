use clap::Parser;

use img2ascii::cli::{self, Cli, Commands, ConvertArgs, SettingsOverrides};

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Convert {
            input,
            out_text,
            out_image,
            config,
            width,
            height,
            stretch_width,
            stretch_height,
            brightness,
            contrast,
            saturation,
            grayscale,
            invert,
            hue,
            sepia,
            colorized,
            charset,
            chars,
            yes,
        } => cli::handle_convert(ConvertArgs {
            input,
            out_text,
            out_image,
            config,
            overrides: SettingsOverrides {
                width,
                height,
                stretch_width,
                stretch_height,
                brightness,
                contrast,
                saturation,
                grayscale,
                invert,
                hue,
                sepia,
                colorized,
                charset,
                chars,
            },
            yes,
        }),
        Commands::Charsets => {
            cli::handle_charsets();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

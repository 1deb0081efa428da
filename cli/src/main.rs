use std::path::PathBuf;
use std::process::ExitCode;

use argh::FromArgs;
use img2mem_core::convert::convert;

#[derive(FromArgs)]
/// Convert an image into a .mem memory-initialization file with one 24-bit
/// RGB pixel word per line.
struct Args {
    /// input image path
    #[argh(positional)]
    input: PathBuf,

    /// output .mem file path
    #[argh(positional)]
    output: PathBuf,

    /// target width in pixels
    #[argh(positional, default = "320")]
    width: u32,

    /// target height in pixels
    #[argh(positional, default = "240")]
    height: u32,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();
    match convert(&args.input, &args.output, args.width, args.height) {
        Ok(summary) => {
            log::info!(
                "wrote {}x{} = {} pixels to {}",
                summary.width,
                summary.height,
                summary.pixels,
                args.output.display()
            );
            log::info!(
                "file size: {} words x 24 bits = {} bytes",
                summary.pixels,
                summary.bytes
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

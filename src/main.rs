use anyhow::{bail, Context, Result};
use std::{
    env, fs,
    io::{self, Read},
};

use kindle_clippings::clippings::{
    clipping::sort_clippings,
    filter::filter_by_title,
    parser::parse_clippings,
    renderer::{render_clippings, OutputFormat},
};

struct Args {
    format: OutputFormat,
    title_filter: Option<String>,
    input_path: Option<String>,
}

fn get_args() -> Result<Option<Args>> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut opts = getopts::Options::new();
    opts.optopt("f", "format", "output format (default: json)", "json|csv|md");
    opts.optopt(
        "t",
        "title",
        "only keep clippings with this exact title",
        "TITLE",
    );
    opts.optflag("h", "help", "print this help");

    let matches = match opts.parse(&args) {
        Ok(m) => m,
        Err(f) => bail!(f),
    };

    if matches.opt_present("h") {
        let brief = "Usage: kindle-clippings [options] [FILE]\n\n\
            Reads a Kindle 'My Clippings.txt' export from FILE or standard input\n\
            and writes it as JSON, CSV, or Markdown to standard output.";
        print!("{}", opts.usage(brief));
        return Ok(None);
    }

    let format = match matches.opt_str("f") {
        Some(name) => OutputFormat::of(&name)?,
        None => OutputFormat::Json,
    };

    let title_filter = matches.opt_str("t");
    let input_path = matches.free.first().cloned();

    Ok(Some(Args {
        format,
        title_filter,
        input_path,
    }))
}

fn main() -> Result<()> {
    let args = match get_args()? {
        Some(args) => args,
        None => return Ok(()),
    };

    let txt = match &args.input_path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?
        }
        None => {
            let mut txt = String::new();
            io::stdin()
                .read_to_string(&mut txt)
                .context("Failed to read standard input")?;
            txt
        }
    };

    let clippings = parse_clippings(&txt)?;
    let mut clippings = filter_by_title(clippings, args.title_filter.as_deref());
    sort_clippings(&mut clippings);

    let stdout = io::stdout();
    render_clippings(&mut stdout.lock(), &clippings, &args.format)?;

    Ok(())
}

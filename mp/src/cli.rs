use anyhow::{Context, Result};
use blockpad::rand::{Rng32, XorShift32};
use blockpad::{pad, ConfigError, Variant};
use clap::Parser;
use std::ffi::OsString;
use std::io::{self, IsTerminal, Read, Write};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// block size to pad to, either the default or the alternate size
    #[arg(short = 'p')]
    padding: Option<usize>,

    /// print usage to stderr and exit without reading input
    #[arg(short = 'h', default_value_t = false)]
    help: bool,
}

/// One run of the padder over a set of streams
pub struct Session<R, W, E, G> {
    variant: Variant,
    input: R,
    input_is_terminal: bool,
    out: W,
    err: E,
    rng: G,
}

impl<R: Read, W: Write, E: Write> Session<R, W, E, XorShift32> {
    pub fn new(variant: Variant, input: R, out: W, err: E) -> Self {
        Self {
            variant,
            input,
            input_is_terminal: false,
            out,
            err,
            rng: XorShift32::from_time(),
        }
    }
}

impl<R: Read, W: Write, E: Write, G: Rng32> Session<R, W, E, G> {
    /// Mark whether the input is an interactive terminal, in which case it is never read
    pub fn terminal(mut self, input_is_terminal: bool) -> Self {
        self.input_is_terminal = input_is_terminal;
        self
    }

    /// Swap the random source used for random-letter filler
    pub fn with_rng<G2: Rng32>(self, rng: G2) -> Session<R, W, E, G2> {
        Session {
            variant: self.variant,
            input: self.input,
            input_is_terminal: self.input_is_terminal,
            out: self.out,
            err: self.err,
            rng,
        }
    }

    /// Run to completion and return the process exit code
    pub fn run<I, T>(mut self, args: I) -> u8
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match self.try_run(args) {
            Ok(()) => 0,
            Err(e) => {
                let message = match e.downcast_ref::<clap::Error>() {
                    // first line only, our own usage follows instead of clap's
                    Some(parse_err) => parse_err
                        .to_string()
                        .lines()
                        .next()
                        .unwrap_or("")
                        .to_owned(),
                    None => format!("{e:#}"),
                };
                let _ = writeln!(self.err, "{}", message.trim_end());
                if e.is::<ConfigError>() || e.is::<clap::Error>() {
                    let _ = self.usage();
                }
                1
            }
        }
    }

    fn try_run<I, T>(&mut self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = Args::try_parse_from(args)?;
        if args.help {
            return self.usage();
        }

        let config = self.variant.resolve(args.padding)?;
        log::debug!("{} running with {config:?}", self.variant.name);

        if self.input_is_terminal {
            log::debug!("stdin is a terminal, not reading from it");
            return self.usage();
        }

        let mut input = vec![];
        self.input
            .read_to_end(&mut input)
            .context("Error reading input")?;

        let padded = pad(&input, &config, &mut self.rng);

        self.out
            .write_all(&padded)
            .and_then(|()| self.out.flush())
            .context("Error writing output")?;
        log::debug!("wrote {} bytes from {} bytes of input", padded.len(), input.len());

        writeln!(self.err, "Data successfully padded.")?;
        writeln!(self.err, "Original size: {} bytes", input.len())?;
        writeln!(self.err, "Padded size: {} bytes", padded.len())?;

        Ok(())
    }

    fn usage(&mut self) -> Result<()> {
        let Variant {
            name,
            default_size,
            alternate_size,
            filler,
        } = self.variant;

        writeln!(self.err, "Usage: {name} [-p {alternate_size}] < infile > outfile")?;
        writeln!(self.err)?;
        writeln!(
            self.err,
            "This program pads UTF-8 text to the nearest multiple of {default_size} (default) or {alternate_size} bytes using {}.",
            filler.describe()
        )?;
        writeln!(
            self.err,
            "It reads from stdin and writes to stdout, allowing use in pipelines."
        )?;
        writeln!(self.err)?;
        writeln!(self.err, "Flags:")?;
        writeln!(
            self.err,
            "  -p {alternate_size}\tPad to multiples of {alternate_size} instead of {default_size}"
        )?;

        Ok(())
    }
}

/// Run a variant against the process's own arguments and standard streams
pub fn run(variant: Variant) -> ExitCode {
    let stdin = io::stdin();
    let input_is_terminal = stdin.is_terminal();

    let code = Session::new(variant, stdin.lock(), io::stdout().lock(), io::stderr().lock())
        .terminal(input_is_terminal)
        .run(std::env::args_os());

    ExitCode::from(code)
}

use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::{Parser, ValueEnum};
use tony_lexer::{
    errors::errors::{Error, ErrorImpl, ErrorTip},
    lexer::tokens::{coalesce, Token},
    registry::{all_lexers, get_lexer_by_name, get_lexer_for_filename, LexerInfo, TONY},
    LineCursor,
};

const DEMO: &str = r#"---
# Service defaults. TODO: split per environment
!service
name: "api-$[env.REGION]"
<<: .[defaults.base]
port: 8080
ratio: -0.75
mask: 0x1F
mode: 0o644
enabled: true
fallback: null
owner: !user(admin, 'ops', 3)
tags: [web, {tier: front}]
script: !literal
|
  echo "hello"
  exit 0
after: done
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One `Token.Kind<TAB>"lexeme"` per line
    Raw,
    /// Line, column and byte span for each token
    Spans,
}

#[derive(Debug, Parser)]
#[command(name = "tony-lex", version, about = "Tokenize Tony documents for highlighting", long_about = None)]
struct Arguments {
    /// File to tokenize, stdin when omitted
    file: Option<PathBuf>,

    /// Lexer to use, guessed from the file name when omitted
    #[arg(short = 'l', long = "lexer")]
    lexer: Option<String>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = Format::Raw)]
    format: Format,

    /// Merge neighbouring tokens of the same kind
    #[arg(long, action = clap::ArgAction::SetTrue)]
    merge: bool,

    /// List the registered lexers and exit
    #[arg(long, action = clap::ArgAction::SetTrue)]
    list: bool,

    /// Tokenize a built-in sample document
    #[arg(long, action = clap::ArgAction::SetTrue)]
    demo: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let arguments = Arguments::parse();

    if arguments.list {
        list_lexers();
        return ExitCode::SUCCESS;
    }

    match run(&arguments) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            display_error(&error);
            ExitCode::FAILURE
        }
    }
}

fn run(arguments: &Arguments) -> Result<(), Error> {
    let lexer = select_lexer(arguments)?;
    log::info!("using lexer {}", lexer.name);

    let source = if arguments.demo {
        DEMO.to_string()
    } else {
        read_input(arguments.file.as_ref())?
    };

    let tokens = if arguments.merge {
        coalesce(&source, lexer.lexer(&source))
    } else {
        lexer.tokenize(&source)
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut cursor = LineCursor::new(&source);

    for token in &tokens {
        let line = match arguments.format {
            Format::Raw => token.to_string(),
            Format::Spans => describe_span(&mut cursor, token),
        };

        // A closed pipe (e.g. `| head`) just ends the output.
        if writeln!(out, "{}", line).is_err() {
            break;
        }
    }

    Ok(())
}

fn select_lexer(arguments: &Arguments) -> Result<&'static LexerInfo, Error> {
    if let Some(name) = &arguments.lexer {
        return get_lexer_by_name(name);
    }

    match &arguments.file {
        Some(path) if !arguments.demo => get_lexer_for_filename(path).or_else(|error| {
            log::warn!("{}, falling back to {}", error, TONY.name);
            Ok(&TONY)
        }),
        _ => Ok(&TONY),
    }
}

fn read_input(file: Option<&PathBuf>) -> Result<String, Error> {
    match file {
        Some(path) => fs::read_to_string(path).map_err(|error| {
            Error::new(ErrorImpl::Io {
                path: path.to_string_lossy().into_owned(),
                message: error.to_string(),
            })
        }),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source).map_err(|error| {
                Error::new(ErrorImpl::Io {
                    path: String::from("<stdin>"),
                    message: error.to_string(),
                })
            })?;
            Ok(source)
        }
    }
}

fn describe_span(cursor: &mut LineCursor<'_>, token: &Token<'_>) -> String {
    let (line, column) = cursor.seek(token.span.start);

    format!(
        "{}:{} {}..{} {} {:?}",
        line, column, token.span.start, token.span.end, token.kind, token.value
    )
}

fn list_lexers() {
    for lexer in all_lexers() {
        println!(
            "{} (aliases: {}; files: {}; mimetypes: {})",
            lexer.name,
            lexer.aliases.join(", "),
            lexer.filenames.join(", "),
            lexer.mimetypes.join(", ")
        );
    }
}

fn display_error(error: &Error) {
    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {} ({})", error.get_error_name(), error);
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }

    if let ErrorImpl::LexerNotFound { .. } = error.kind() {
        eprintln!("Available lexers:");
        for lexer in all_lexers() {
            eprintln!("  - {} (aliases: {})", lexer.name, lexer.aliases.join(", "));
        }
    }
}

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{error, warn};

use arv::{unphased_match, Genome, Phenotypes};

#[derive(Parser, Debug)]
#[clap(name = "arv", author, version, about = "Parse 23andMe raw genotype files", long_about = None)]
struct Cli {
    /// Set the verbosity level (-v -vv -vvv)
    #[clap(short = 'v', long, parse(from_occurrences), global = true)]
    verbose: u8,

    /// Disable warnings; only errors are printed.
    #[clap(short = 'q', long, global = true)]
    quiet: bool,

    /// Print a canned phenotype sentence (eye color, complexion) per file.
    #[clap(long)]
    example: bool,

    /// Drop into an interactive shell over the loaded genome(s) once all files are read.
    #[clap(long)]
    repl: bool,

    /// 23andMe raw genotype file(s) to load.
    #[clap(required = true)]
    files: Vec<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    logger::Logger::init(cli.verbose, cli.quiet);

    let mut genomes = Vec::with_capacity(cli.files.len());
    let mut had_error = false;

    for path in &cli.files {
        match arv::load(path) {
            Ok(genome) => {
                let sex = if genome.y_chromosome { "male" } else { "female" };
                println!("{} ... {} SNPs, {sex}", path.display(), genome.len());
                if cli.example {
                    print_example(&genome);
                }
                genomes.push(genome);
            }
            Err(err) => {
                error!("{err:#}");
                had_error = true;
            }
        }
    }

    if cli.repl {
        repl(&genomes);
    }

    process::exit(i32::from(had_error));
}

/// Print the canned "A {gender} with {color} eyes and {complexion} skin"
/// sentence, derived from `rs12913832` (eye color) and `rs1426654`
/// (complexion). A missing RSID is a per-file warning, not a hard failure:
/// this sentence is a convenience demo, not a correctness requirement.
fn print_example(genome: &Genome) {
    let sex = if genome.y_chromosome { "male" } else { "female" };

    let eye_color_mapping = Phenotypes::new().with("AA", "brown").with("AG", "brown or green").with("GG", "blue");

    let eye_color = match genome.get("rs12913832") {
        Ok(snp) => unphased_match(snp.genotype, &eye_color_mapping).ok(),
        Err(_) => None,
    };
    let complexion = match genome.get("rs1426654") {
        Ok(snp) => Some(if snp.genotype.to_string() == "AA" { "light" } else { "dark" }),
        Err(_) => None,
    };

    match (eye_color, complexion) {
        (Some(color), Some(complexion)) => println!("A {sex} with {color} eyes and {complexion} skin"),
        _ => warn!("'{}' is missing rs12913832 or rs1426654; skipping example sentence", genome.name),
    }
}

/// A minimal line-oriented shell bound to the loaded genome(s): the
/// closest idiomatic Rust equivalent of Python's `code.interact()`, which
/// has no runtime REPL/eval to reproduce verbatim.
fn repl(genomes: &[Genome]) {
    println!("arv interactive shell. Commands: get <rsid>, len, y_chromosome, contains <rsid>, quit/exit");
    let stdin = io::stdin();

    loop {
        print!("arv> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let mut words = line.trim().split_whitespace();
        match words.next() {
            None => continue,
            Some("quit" | "exit") => break,
            Some("len") => println!("{}", genomes.iter().map(Genome::len).sum::<usize>()),
            Some("y_chromosome") => println!("{}", genomes.iter().any(|g| g.y_chromosome)),
            Some("get") => match words.next() {
                Some(rsid) => match genomes.iter().find_map(|g| g.get(rsid).ok()) {
                    Some(snp) => println!("{snp}"),
                    None => println!("not found"),
                },
                None => println!("usage: get <rsid>"),
            },
            Some("contains") => match words.next() {
                Some(rsid) => println!("{}", genomes.iter().any(|g| g.contains(rsid))),
                None => println!("usage: contains <rsid>"),
            },
            Some(other) => println!("unknown command: {other}"),
        }
    }
}

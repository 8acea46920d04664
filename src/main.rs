use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use std::io::BufRead;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::catalog::{CatalogSource, FileCatalogSource, HttpCatalogSource, HttpImageSource};
use crate::generator::QuestionGenerator;
use crate::output::console::ConsoleOutput;
use crate::quiz::{Quiz, Settings};
use crate::settings::{Args, HTTP_TIMEOUT};
use crate::statistics::{DataSource, JsonFileStorage, StatisticService};

mod catalog;
mod error;
mod generator;
mod output;
mod quiz;
mod settings;
mod statistics;

const TICK_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Command {
    Answer(bool),
    Restart,
    Quit,
}

impl Command {
    fn parse(input: &str) -> Option<Command> {
        match input.trim().to_lowercase().as_str() {
            "y" | "yes" => Some(Command::Answer(true)),
            "n" | "no" => Some(Command::Answer(false)),
            "r" | "restart" => Some(Command::Restart),
            "q" | "quit" => Some(Command::Quit),
            _ => None,
        }
    }
}

fn read_commands() -> Receiver<Command> {
    let (sender, receiver) = channel();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(_) => break,
            };
            match Command::parse(&line) {
                Some(command) => {
                    if sender.send(command).is_err() {
                        return;
                    }
                }
                None => println!("Type y, n, r or q"),
            }
        }
        sender.send(Command::Quit).ok();
    });
    receiver
}

fn open_statistics(args: &Args) -> Result<StatisticService> {
    let path = args.stats_path()?;
    debug!("Using statistics file {}", path.display());
    let storage = JsonFileStorage::open(&path)
        .with_context(|| format!("Could not open statistics file {}", path.display()))?;
    Ok(StatisticService::new(DataSource::new(storage)))
}

fn print_statistics(statistics: &StatisticService) {
    let lifetime = statistics.lifetime();
    println!("Games played: {}", lifetime.games_count);
    if lifetime.games_count > 0 {
        println!(
            "Best game: {}/{} ({})",
            lifetime.best_game.correct,
            lifetime.best_game.total,
            lifetime.best_game.date.format("%d.%m.%y %H:%M")
        );
    }
    println!(
        "Questions answered: {}/{}",
        statistics.total_correct_answers(),
        statistics.total_questions_asked()
    );
    println!("Average accuracy: {:.2}%", lifetime.total_accuracy);
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let statistics = open_statistics(&args)?;
    if args.stats {
        print_statistics(&statistics);
        return Ok(());
    }

    let catalog_source: Arc<dyn CatalogSource> = match &args.catalog_file {
        Some(path) => Arc::new(FileCatalogSource::new(path)),
        None => Arc::new(
            HttpCatalogSource::new(&args.catalog_url, HTTP_TIMEOUT)
                .context("Could not create the catalog client")?,
        ),
    };
    let image_source =
        Arc::new(HttpImageSource::new(HTTP_TIMEOUT).context("Could not create the image client")?);
    let mut generator = QuestionGenerator::new(catalog_source, image_source);
    if let Some(seed) = args.seed {
        info!("Seeding question generator with {}", seed);
        generator = generator.with_seed(seed);
    }

    let mut quiz = Quiz::new(generator, statistics, ConsoleOutput::new(), Settings::default());
    let commands = read_commands();
    println!("Loading movies...");
    quiz.start();

    let mut last_tick = Instant::now();
    loop {
        loop {
            match commands.try_recv() {
                Ok(Command::Answer(answer)) => {
                    quiz.submit_answer(answer);
                }
                Ok(Command::Restart) => {
                    println!("Loading movies...");
                    quiz.start();
                }
                Ok(Command::Quit) | Err(TryRecvError::Disconnected) => return Ok(()),
                Err(TryRecvError::Empty) => break,
            }
        }

        let now = Instant::now();
        quiz.tick(now.duration_since(last_tick));
        last_tick = now;
        thread::sleep(TICK_INTERVAL);
    }
}

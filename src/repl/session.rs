//! REPL Session
//!
//! Per-run state (pagination cursor, caught Pokemon) and command execution.

use std::collections::BTreeMap;
use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

use crate::api::PokeApiClient;
use crate::error::{PokedexError, Result};
use crate::models::{LocationAreaPage, Pokemon};
use crate::repl::{clean_input, Command, COMMANDS};

/// Text shown before every line of input
pub const PROMPT: &str = "Pokedex > ";

/// What the loop should do after a line has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

// == Session ==
/// State carried between commands of one interactive run.
#[derive(Debug)]
pub struct Session {
    client: PokeApiClient,
    /// URL of the next location page, if the API reported one
    next: Option<String>,
    /// URL of the previous location page, if the API reported one
    previous: Option<String>,
    /// Caught Pokemon by name
    pokedex: BTreeMap<String, Pokemon>,
    rng: StdRng,
    /// Exclusive upper bound of the catch roll
    catch_difficulty: u32,
}

impl Session {
    // == Constructor ==
    pub fn new(client: PokeApiClient, catch_difficulty: u32) -> Self {
        Self::with_rng(client, catch_difficulty, StdRng::from_entropy())
    }

    /// Creates a session with a caller-supplied random source.
    pub fn with_rng(client: PokeApiClient, catch_difficulty: u32, rng: StdRng) -> Self {
        Self {
            client,
            next: None,
            previous: None,
            pokedex: BTreeMap::new(),
            rng,
            catch_difficulty: catch_difficulty.max(1),
        }
    }

    pub fn client(&self) -> &PokeApiClient {
        &self.client
    }

    pub fn pokedex(&self) -> &BTreeMap<String, Pokemon> {
        &self.pokedex
    }

    // == Run ==
    /// Reads lines from `input` until `exit` or end of input.
    ///
    /// Command errors are written to `out` and do not end the loop; only a
    /// failure to read input or write output does.
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();

        loop {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            let Some(line) = lines.next_line().await? else {
                writeln!(out)?;
                self.execute(&["exit".to_string()], out).await?;
                return Ok(());
            };

            let words = clean_input(&line);
            if words.is_empty() {
                continue;
            }

            match self.execute(&words, out).await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(PokedexError::Io(err)) => return Err(PokedexError::Io(err)),
                Err(err) => {
                    warn!("Command {:?} failed: {}", words[0], err);
                    writeln!(out, "{}", err)?;
                }
            }
        }
    }

    // == Execute ==
    /// Runs one already-cleaned command line.
    pub async fn execute<W: Write>(&mut self, words: &[String], out: &mut W) -> Result<Flow> {
        let Some((name, params)) = words.split_first() else {
            return Ok(Flow::Continue);
        };

        let Some(command) = Command::parse(name) else {
            writeln!(out, "Unknown command")?;
            return Ok(Flow::Continue);
        };
        debug!(?command, ?params, "Executing command");

        match command {
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Command::Help => self.help(out)?,
            Command::Map => self.map(out).await?,
            Command::MapBack => self.map_back(out).await?,
            Command::Explore => self.explore(required(params, "location")?, out).await?,
            Command::Catch => self.catch(required(params, "pokemon")?, out).await?,
            Command::Inspect => self.inspect(required(params, "pokemon")?, out)?,
            Command::Pokedex => self.list_pokedex(out)?,
            Command::Cache => self.cache_stats(out).await?,
        }

        Ok(Flow::Continue)
    }

    // == Commands ==
    fn help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Welcome to the Pokedex!")?;
        writeln!(out, "Usage:")?;
        writeln!(out)?;
        for entry in COMMANDS {
            writeln!(out, "{}: {}", entry.usage, entry.description)?;
        }
        Ok(())
    }

    async fn map<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let url = match &self.next {
            Some(next) => next.clone(),
            None => self.client.location_areas_url(),
        };
        let page = self.client.location_page(&url).await?;
        self.show_page(page, out)
    }

    async fn map_back<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let Some(url) = self.previous.clone() else {
            writeln!(out, "You're on the first page")?;
            return Ok(());
        };
        let page = self.client.location_page(&url).await?;
        self.show_page(page, out)
    }

    fn show_page<W: Write>(&mut self, page: LocationAreaPage, out: &mut W) -> Result<()> {
        for area in &page.results {
            writeln!(out, "{}", area.name)?;
        }
        self.next = page.next;
        self.previous = page.previous;
        Ok(())
    }

    async fn explore<W: Write>(&self, location: &str, out: &mut W) -> Result<()> {
        let area = self.client.location_area(location).await?;

        writeln!(out, "Exploring {}...", area.name)?;
        writeln!(out, "Found Pokemon:")?;
        for encounter in &area.pokemon_encounters {
            writeln!(out, " - {}", encounter.pokemon.name)?;
        }
        Ok(())
    }

    async fn catch<W: Write>(&mut self, name: &str, out: &mut W) -> Result<()> {
        let pokemon = self.client.pokemon(name).await?;
        let name = pokemon.name.clone();

        writeln!(out, "Throwing a Pokeball at {}...", name)?;
        let chance = self.rng.gen_range(0..self.catch_difficulty);
        if chance > pokemon.base_experience.unwrap_or(0) {
            writeln!(out, "{} was caught!", name)?;
            self.pokedex.insert(name, pokemon);
        } else {
            writeln!(out, "{} escaped!", name)?;
        }
        Ok(())
    }

    fn inspect<W: Write>(&self, name: &str, out: &mut W) -> Result<()> {
        let Some(pokemon) = self.pokedex.get(name) else {
            writeln!(out, "You haven't caught {}!", name)?;
            return Ok(());
        };

        writeln!(out, "Name: {}", pokemon.name)?;
        writeln!(out, "Height: {}", pokemon.height)?;
        writeln!(out, "Weight: {}", pokemon.weight)?;
        writeln!(out, "Stats:")?;
        for stat in &pokemon.stats {
            writeln!(out, " -{}: {}", stat.stat.name, stat.base_stat)?;
        }
        writeln!(out, "Types:")?;
        for kind in &pokemon.types {
            writeln!(out, " - {}", kind.kind.name)?;
        }
        Ok(())
    }

    fn list_pokedex<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Your Pokemon:")?;
        for name in self.pokedex.keys() {
            writeln!(out, " - {}", name)?;
        }
        Ok(())
    }

    async fn cache_stats<W: Write>(&self, out: &mut W) -> Result<()> {
        let cache = self.client.cache();
        let stats = cache.stats().await;
        let ttl = cache.ttl();

        writeln!(out, "Cached responses: {} (ttl {:?})", stats.total_entries, ttl)?;
        writeln!(out, "Hits: {}", stats.hits)?;
        writeln!(out, "Misses: {}", stats.misses)?;
        writeln!(out, "Expired on read: {}", stats.expired)?;
        writeln!(out, "Reaped: {}", stats.reaped)?;
        writeln!(out, "Hit rate: {:.1}%", stats.hit_rate() * 100.0)?;
        Ok(())
    }
}

/// Returns the first parameter or a missing-argument error naming it.
fn required<'a>(params: &'a [String], name: &'static str) -> Result<&'a str> {
    params
        .first()
        .map(String::as_str)
        .ok_or(PokedexError::MissingArgument(name))
}

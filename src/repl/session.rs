//! REPL session state and command handlers.

use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::api::PokeApiClient;
use crate::error::{PokedexError, Result};
use crate::models::LocationAreaPage;
use crate::pokedex::{catch_chance, roll_catches, Pokedex};
use crate::repl::commands::{Command, COMMANDS};

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// State threaded through every command: the cached client, the
/// pagination cursors, and the creatures caught so far.
#[derive(Debug)]
pub struct Session {
    client: PokeApiClient,
    next_url: Option<String>,
    previous_url: Option<String>,
    pokedex: Pokedex,
    rng: StdRng,
}

impl Session {
    /// Starts a session on the first page of location areas.
    pub fn new(client: PokeApiClient) -> Self {
        Self::with_rng(client, StdRng::from_os_rng())
    }

    /// Starts a session with a deterministic catch roll sequence.
    pub fn with_seed(client: PokeApiClient, seed: u64) -> Self {
        Self::with_rng(client, StdRng::seed_from_u64(seed))
    }

    fn with_rng(client: PokeApiClient, rng: StdRng) -> Self {
        Self {
            next_url: Some(client.first_location_page_url()),
            previous_url: None,
            pokedex: Pokedex::new(),
            client,
            rng,
        }
    }

    pub fn client(&self) -> &PokeApiClient {
        &self.client
    }

    pub fn pokedex(&self) -> &Pokedex {
        &self.pokedex
    }

    pub fn next_url(&self) -> Option<&str> {
        self.next_url.as_deref()
    }

    pub fn previous_url(&self) -> Option<&str> {
        self.previous_url.as_deref()
    }

    /// Runs one command, writing its output to `out`.
    pub async fn execute<W: Write>(
        &mut self,
        command: Command,
        args: &[String],
        out: &mut W,
    ) -> Result<Flow> {
        debug!(
            "Executing {} with {} argument(s)",
            command.name(),
            args.len()
        );

        match command {
            Command::Help => self.help(out)?,
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Command::Map => self.map(out).await?,
            Command::Mapb => self.mapb(out).await?,
            Command::Explore => self.explore(args, out).await?,
            Command::Catch => self.catch(args, out).await?,
            Command::Inspect => self.inspect(args, out)?,
        }

        Ok(Flow::Continue)
    }

    fn help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Welcome to the Pokedex!")?;
        writeln!(out, "Usage:")?;
        writeln!(out)?;
        for info in COMMANDS {
            writeln!(out, "{}: {}", info.name, info.description)?;
        }
        writeln!(out)?;
        Ok(())
    }

    async fn map<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let Some(url) = self.next_url.clone() else {
            writeln!(out, "you're on the last page")?;
            return Ok(());
        };
        self.show_page(&url, out).await
    }

    async fn mapb<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let Some(url) = self.previous_url.clone() else {
            writeln!(out, "you're on the first page")?;
            return Ok(());
        };
        self.show_page(&url, out).await
    }

    /// Fetches a page, moves both cursors, and lists its areas.
    async fn show_page<W: Write>(&mut self, url: &str, out: &mut W) -> Result<()> {
        let LocationAreaPage {
            next,
            previous,
            results,
            ..
        } = self.client.location_areas(url).await?;

        self.next_url = next;
        self.previous_url = previous;

        for area in results {
            writeln!(out, "{}", area.name)?;
        }
        Ok(())
    }

    async fn explore<W: Write>(&mut self, args: &[String], out: &mut W) -> Result<()> {
        let name = args
            .first()
            .ok_or(PokedexError::MissingArgument("location area name"))?;
        writeln!(out, "Exploring {}...", name)?;

        let area = self.client.location_area(name).await?;

        writeln!(out, "Found Pokemon:")?;
        for encounter in &area.pokemon_encounters {
            writeln!(out, " - {}", encounter.pokemon.name)?;
        }
        Ok(())
    }

    async fn catch<W: Write>(&mut self, args: &[String], out: &mut W) -> Result<()> {
        let name = args
            .first()
            .ok_or(PokedexError::MissingArgument("Pokemon name"))?;
        writeln!(out, "Throwing a Pokeball at {}...", name)?;

        let pokemon = self.client.pokemon(name).await?;

        let chance = catch_chance(pokemon.base_experience);
        let roll = self.rng.random_range(1..=100u32);
        debug!("Catch roll {} against chance {}", roll, chance);

        if roll_catches(roll, chance) {
            writeln!(out, "{} was caught!", pokemon.name)?;
            writeln!(out, "You may now inspect it with the inspect command.")?;
            self.pokedex.insert(pokemon);
        } else {
            writeln!(out, "{} escaped!", pokemon.name)?;
        }
        Ok(())
    }

    fn inspect<W: Write>(&self, args: &[String], out: &mut W) -> Result<()> {
        let name = args
            .first()
            .ok_or(PokedexError::MissingArgument("Pokemon name"))?;

        let Some(pokemon) = self.pokedex.get(name) else {
            writeln!(out, "you have not caught that pokemon")?;
            return Ok(());
        };

        writeln!(out, "Name: {}", pokemon.name)?;
        writeln!(out, "Height: {}", pokemon.height)?;
        writeln!(out, "Weight: {}", pokemon.weight)?;
        writeln!(out, "Stats:")?;
        for stat in &pokemon.stats {
            writeln!(out, "  -{}: {}", stat.stat.name, stat.base_stat)?;
        }
        writeln!(out, "Types:")?;
        for kind in &pokemon.types {
            writeln!(out, "  - {}", kind.kind.name)?;
        }
        Ok(())
    }
}

use application::catalog_service::CatalogService;
use application::chat_service::{ChatService, Submission};
use clap::{ArgAction, Parser};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use infrastructure::config::Config;
use infrastructure::openrouter_client::OpenRouterClient;
use shared::telemetry::ResponseTimer;
use shared::types::Result;
use uuid::Uuid;

use crate::clipboard;
use crate::render;

/// WellSpring: student wellness companion in the terminal.
#[derive(Parser, Debug)]
#[command(name = "wellspring_cli")]
#[command(
    about = "Student wellness companion: supportive AI chat, books, videos, and counsellor booking",
    long_about = None
)]
pub struct Cli {
    /// Browse the wellness book library
    #[arg(long, action = ArgAction::SetTrue)]
    pub books: bool,

    /// Browse the wellness video hub
    #[arg(long, action = ArgAction::SetTrue)]
    pub videos: bool,

    /// Filter videos by category (use with --videos)
    #[arg(long)]
    pub category: Option<String>,

    /// Browse counsellors and book an anonymous session
    #[arg(long, action = ArgAction::SetTrue)]
    pub counsellors: bool,

    /// Copy each assistant reply to the clipboard
    #[arg(long, action = ArgAction::SetTrue)]
    pub copy: bool,

    /// Search query for the browsing modes
    #[arg(value_parser, trailing_var_arg = true)]
    pub query: Vec<String>,
}

pub struct CliApp {
    catalog: CatalogService,
}

impl CliApp {
    pub fn new() -> Self {
        Self {
            catalog: CatalogService::new(),
        }
    }

    pub async fn run(&mut self, cli: Cli) -> Result<()> {
        let query = cli.query.join(" ");
        if cli.books {
            self.handle_books(&query)
        } else if cli.videos {
            self.handle_videos(&query, cli.category.as_deref())
        } else if cli.counsellors {
            self.handle_counsellors(&query)
        } else {
            self.handle_chat(cli.copy).await
        }
    }

    async fn handle_chat(&self, copy_replies: bool) -> Result<()> {
        let config = Config::load();
        let client = OpenRouterClient::new(&config);
        let mut service = ChatService::new(client);

        println!("{}", "WellSpring Friend".green().bold());
        println!("{}", "Type 'exit' to quit.".dimmed());
        render::print_message(&service.session().messages()[0]);

        loop {
            let input: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("You")
                .allow_empty(true)
                .interact_text()?;
            let trimmed = input.trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
                break;
            }

            eprintln!("{}", "Thinking...".dimmed());
            let timer = ResponseTimer::start();
            if service.submit(&input).await == Submission::Ignored {
                continue;
            }

            if let Some(reply) = service.session().messages().last() {
                render::print_message(reply);
                eprintln!("{}", format!("(replied in {})", timer.human()).dimmed());
                if copy_replies {
                    if let Err(err) = clipboard::copy_to_clipboard(&reply.text) {
                        eprintln!("{} {}", "Clipboard copy failed:".red(), err);
                    }
                }
            }
        }

        Ok(())
    }

    fn handle_books(&self, query: &str) -> Result<()> {
        println!("{}", "Book Library".green().bold());
        let books = self.catalog.search_books(query);
        if books.is_empty() {
            render::print_empty_hint();
            return Ok(());
        }
        for book in books {
            render::print_book(book);
        }
        Ok(())
    }

    fn handle_videos(&self, query: &str, category: Option<&str>) -> Result<()> {
        println!("{}", "Video Hub".green().bold());
        let videos = self.catalog.search_videos(query, category);
        if videos.is_empty() {
            render::print_empty_hint();
            return Ok(());
        }
        for video in videos {
            render::print_video(video);
        }
        Ok(())
    }

    fn handle_counsellors(&self, query: &str) -> Result<()> {
        println!("{}", "Book a Counsellor".green().bold());
        println!(
            "{}",
            "Choose a counsellor for anonymous, confidential support".dimmed()
        );
        let counsellors = self.catalog.search_counsellors(query);
        if counsellors.is_empty() {
            render::print_empty_hint();
            return Ok(());
        }
        for (i, counsellor) in counsellors.iter().enumerate() {
            render::print_counsellor(i + 1, counsellor);
        }

        let book_now = Confirm::new()
            .with_prompt("Book a session now?")
            .default(true)
            .interact()?;
        if !book_now {
            return Ok(());
        }

        let names: Vec<&str> = counsellors.iter().map(|c| c.name).collect();
        let picked = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Counsellor")
            .items(&names)
            .default(0)
            .interact()?;
        let counsellor = counsellors[picked];

        let slot_idx = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Time slot")
            .items(counsellor.availability)
            .default(0)
            .interact()?;
        let slot = counsellor.availability[slot_idx];

        println!("\n{}", "Booking Confirmed!".green().bold());
        println!("Your anonymous session has been scheduled successfully.");
        println!("  Counsellor: {}", counsellor.name);
        println!("  Time: {}", slot);
        println!("  Your ID: Anonymous Student #{}", anonymous_reference());
        Ok(())
    }
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Short anonymous reference shown on the booking confirmation. Nothing
/// is stored; it only gives the student something to quote.
fn anonymous_reference() -> String {
    let id = Uuid::new_v4().simple().to_string();
    id[..6].to_uppercase()
}

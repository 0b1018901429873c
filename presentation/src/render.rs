use colored::Colorize;
use domain::catalog::{Book, Counsellor, Video};
use domain::message::{Message, Sender};

pub fn speaker(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "You",
        Sender::Assistant => "WellSpring",
    }
}

/// Uncolored transcript line; the colored variant is `print_message`.
pub fn format_message(message: &Message) -> String {
    format!("{}: {}", speaker(message.sender), message.text)
}

pub fn print_message(message: &Message) {
    let label = format!("{}:", speaker(message.sender));
    match message.sender {
        Sender::Assistant => println!("{} {}", label.green().bold(), message.text),
        Sender::User => println!("{} {}", label.blue().bold(), message.text),
    }
}

/// Five-star bar plus the numeric rating, e.g. "★★★★☆ 4.8".
pub fn stars(rating: f32) -> String {
    let full = (rating.floor() as usize).min(5);
    format!("{}{} {:.1}", "★".repeat(full), "☆".repeat(5 - full), rating)
}

pub fn print_book(book: &Book) {
    println!(
        "{} {} {}",
        book.title.bold(),
        format!("by {}", book.author).cyan(),
        stars(book.rating).yellow()
    );
    println!("  {}", book.description);
}

pub fn print_video(video: &Video) {
    println!(
        "{} {} {}",
        video.title.bold(),
        format!("[{}]", video.category).magenta(),
        format!("{} · {} views", video.duration, video.views).dimmed()
    );
    println!("  {} {}", video.creator.cyan(), video.description);
}

pub fn print_counsellor(index: usize, counsellor: &Counsellor) {
    println!(
        "{} {} {} {}",
        format!("[{}]", index).blue(),
        counsellor.name.bold(),
        counsellor.specialty.cyan(),
        format!("{} · {}", stars(counsellor.rating), counsellor.experience).yellow()
    );
    println!("  {}", counsellor.description);
    println!(
        "  {}",
        format!("{} slots available", counsellor.availability.len()).dimmed()
    );
}

pub fn print_empty_hint() {
    println!(
        "{}",
        "No results found. Try adjusting your search or category filter.".yellow()
    );
}

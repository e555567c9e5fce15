//! Fixed speech and card text for every turn the skill can produce.
//!
//! One function per message. Templated messages take the book/author data
//! they interpolate; everything else is a static string.

use crate::domain::book::{AuthorRecord, BookRecord};

/// Skill name used as the card-title prefix on every response.
pub const SKILL_NAME: &str = "Kids Classic Books";

pub fn card_greeting() -> &'static str {
    "Welcome to Kids Classic Books"
}

pub fn message_greeting() -> &'static str {
    "Welcome to Kids Classic Books. This skill fetches details for kids books. \
     You can ask for a book by title or author like 'Tell me about Harry Potter from J.K. Rowling'"
}

pub fn reprompt_greeting() -> &'static str {
    "I'm sorry, I am not able to hear your request. Please repeat or say 'help' for sample requests"
}

pub fn card_help() -> &'static str {
    "Help from Kids Classic Books"
}

pub fn message_help() -> &'static str {
    "You can ask this skill 'all-time most popular children books', \
     'most popular children books of this week' or a book by title or author"
}

pub fn card_invalid_request() -> &'static str {
    "Kids Classic Books, unable to process request"
}

pub fn message_invalid_request() -> &'static str {
    "I'm sorry. I was not able to retrieve book title or author from your request. \
     A sample request can be 'Tell me about Harry Potter from J.K. Rowling'"
}

pub fn card_ineligible_request() -> &'static str {
    "Kids Classic Books, non-children book requested"
}

pub fn message_ineligible_request(label: &str) -> String {
    format!("{label} is not a children book according to our data records.")
}

pub fn card_good_bye() -> &'static str {
    "Good Bye from Kids Classic Books"
}

pub fn message_good_bye() -> &'static str {
    "Thank you for using Kids Classic Books"
}

pub fn message_reprompt() -> &'static str {
    "I'm sorry, I am not able to hear your request. Please repeat or say 'help' for sample requests"
}

/// Basic facts about a freshly looked-up book, ending with the prompt
/// that drives the first yes/no follow-up.
pub fn message_basic_facts(book: &BookRecord, author: &AuthorRecord) -> String {
    let year = book
        .publication_year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "an unknown year".to_string());
    let publisher = book.publisher.as_deref().unwrap_or("an unknown publisher");
    let pages = book
        .num_pages
        .map(|p| p.to_string())
        .unwrap_or_else(|| "an unknown number of".to_string());
    let rating = book
        .average_rating
        .map(|r| r.to_string())
        .unwrap_or_else(|| "not rated".to_string());
    let count = book.ratings_count.unwrap_or(0);

    format!(
        "{title} from {name} was published in {year} by publisher {publisher}. \
         It consists of {pages} pages. \
         Its average rating on Goodreads is {rating} from {count} ratings. \
         Do you want to listen to a brief description of {title}? ",
        title = book.title,
        name = author.name,
    )
}

/// The book's description plus the similar-books prompt.
pub fn message_description(book: &BookRecord) -> String {
    match book.description.as_deref() {
        Some(description) => {
            format!("{description} Do you want to know about books similar to {}?", book.title)
        }
        None => format!(
            "I don't have a description for {title} in our data records. \
             Do you want to know about books similar to {title}?",
            title = book.title
        ),
    }
}

/// The similar-books list plus the more-from-author prompt.
pub fn message_similar_books(book: &BookRecord, author: &AuthorRecord) -> String {
    let titles = book.similar_titles();
    if titles.is_empty() {
        format!(
            "I could not find books similar to {title}. \
             Do you want to hear about more books connected to {name}?",
            title = book.title,
            name = author.name,
        )
    } else {
        format!(
            "Books similar to {title} are {list}. \
             Do you want to hear about more books connected to {name}?",
            title = book.title,
            list = join_titles(&titles),
            name = author.name,
        )
    }
}

/// More titles connected to the author.
///
/// The catalog carries no separate author bibliography, so this reads the
/// remainder of the similar-books sequence framed around the author.
pub fn message_more_books_from_author(book: &BookRecord, author: &AuthorRecord) -> String {
    let titles = book.similar_titles();
    if titles.is_empty() {
        format!(
            "I don't have more books connected to {name} in our data records.",
            name = author.name
        )
    } else {
        format!(
            "Readers of {name} also picked up {list}.",
            name = author.name,
            list = join_titles(&titles),
        )
    }
}

fn join_titles(titles: &[&str]) -> String {
    match titles {
        [] => String::new(),
        [only] => (*only).to_string(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}

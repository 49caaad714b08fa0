//! Built-in defaults used when a config file omits a value

/// Wikipedia REST API root (`/page/{title}/html` is appended)
pub const REST_BASE: &str = "https://en.wikipedia.org/w/rest.php/v1";

/// Wikipedia Action API endpoint
pub const ACTION_BASE: &str = "https://en.wikipedia.org/w/api.php";

/// Starting deck for rabbit hole browsing
pub const RABBIT_HOLE_DECK: &[&str] = &[
    "Earth",
    "Google",
    "Adolf_Hitler",
    "Belal_Muhammad",
    "Seneca",
    "Adin_Ross",
    "KFC",
    "Call_of_Duty",
    "Crime_and_Punishment",
    "Goethe",
    "Kenya",
    "Harvard",
    "Kai_Cenat",
];

/// Popular, recognizable topics that speedrun start/target pairs are drawn from
pub const POPULAR_TITLES: &[&str] = &[
    "Earth",
    "Moon",
    "Sun",
    "Solar System",
    "Universe",
    "Milky Way",
    "Galaxy",
    "Star",
    "Planet",
    "Mars",
    "Jupiter",
    "Saturn",
    "Venus",
    "Mercury (planet)",
    "Neptune",
    "Uranus",
    "Pluto",
    "Black hole",
    "Big Bang",
    "Gravity",
    "Light",
    "Time",
    "Mathematics",
    "Physics",
    "Chemistry",
    "Biology",
    "DNA",
    "Evolution",
    "Human",
    "Brain",
    "Heart",
    "Cancer",
    "COVID-19",
    "Vaccine",
    "Artificial intelligence",
    "Machine learning",
    "Computer",
    "Internet",
    "World Wide Web",
    "Software",
    "Algorithm",
    "Programming language",
    "Python (programming language)",
    "JavaScript",
    "React (software)",
    "Google",
    "Apple Inc.",
    "Microsoft",
    "Amazon (company)",
    "Tesla, Inc.",
    "Wikipedia",
    "YouTube",
    "Instagram",
    "TikTok",
    "Twitter",
    "Reddit",
    "Netflix",
    "Spotify",
    "Video game",
    "Minecraft",
    "Fortnite",
    "Chess",
    "Football",
    "Basketball",
    "Olympic Games",
    "FIFA World Cup",
    "Formula One",
    "Tennis",
    "Boxing",
    "Manga",
    "Anime",
    "Star Wars",
    "Marvel Cinematic Universe",
    "Harry Potter",
    "The Lord of the Rings",
    "Game of Thrones",
    "The Beatles",
    "Michael Jackson",
    "Taylor Swift",
    "K-pop",
    "United States",
    "Germany",
    "France",
    "United Kingdom",
    "Italy",
    "Spain",
    "Russia",
    "China",
    "India",
    "Japan",
    "Brazil",
    "Canada",
    "Australia",
    "Africa",
    "Europe",
    "Asia",
    "Antarctica",
    "Berlin",
    "Paris",
    "New York City",
    "London",
    "Rome",
    "Tokyo",
    "Los Angeles",
    "Bitcoin",
    "Cryptocurrency",
    "Stock market",
    "Economy",
    "Inflation",
    "Climate change",
];

pub fn rest_base() -> String {
    REST_BASE.to_string()
}

pub fn action_base() -> String {
    ACTION_BASE.to_string()
}

pub fn max_link_pages() -> u32 {
    1
}

pub fn max_load_attempts() -> u32 {
    5
}

pub fn client_name() -> String {
    "WikiSwipe".to_string()
}

pub fn client_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

pub fn contact_url() -> String {
    "https://github.com/wiki-swipe/wiki-swipe".to_string()
}

pub fn contact_email() -> String {
    "wiki-swipe@example.com".to_string()
}

pub fn deck() -> Vec<String> {
    RABBIT_HOLE_DECK.iter().map(|t| t.to_string()).collect()
}

pub fn refill_below() -> usize {
    5
}

pub fn titles() -> Vec<String> {
    POPULAR_TITLES.iter().map(|t| t.to_string()).collect()
}

pub fn top_candidates() -> usize {
    40
}

pub fn extra_candidates() -> usize {
    40
}

pub fn start_window() -> usize {
    12
}

pub fn preview_blocks() -> usize {
    6
}

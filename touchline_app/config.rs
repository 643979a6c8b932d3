use dotenvy::dotenv;
use std::env;

const DEFAULT_CLUB_NAME: &str = "FC United";
const DEFAULT_SEASONS: &str = "2024-25,2023-24,2022-23";
const DEFAULT_HTTP_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    pub club_name: String,
    /// Selectable seasons, most recent first.
    pub seasons: Vec<String>,
    pub http_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            club_name: DEFAULT_CLUB_NAME.to_string(),
            seasons: parse_seasons(DEFAULT_SEASONS),
            http_port: DEFAULT_HTTP_PORT,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let club_name = match env::var("TOUCHLINE_CLUB_NAME") {
            Ok(val) if !val.trim().is_empty() => val.trim().to_string(),
            _ => DEFAULT_CLUB_NAME.to_string(),
        };

        let seasons = match env::var("TOUCHLINE_SEASONS") {
            Ok(val) => {
                let seasons = parse_seasons(&val);
                if seasons.is_empty() {
                    parse_seasons(DEFAULT_SEASONS)
                } else {
                    seasons
                }
            }
            Err(_) => parse_seasons(DEFAULT_SEASONS),
        };

        let http_port = match env::var("TOUCHLINE_HTTP_PORT") {
            Ok(val) => val.parse::<u16>().unwrap_or(DEFAULT_HTTP_PORT),
            Err(_) => DEFAULT_HTTP_PORT,
        };

        Self {
            club_name,
            seasons,
            http_port,
        }
    }

    /// Season shown when none is selected.
    pub fn default_season(&self) -> &str {
        self.seasons
            .first()
            .map(String::as_str)
            .unwrap_or("2024-25")
    }
}

fn parse_seasons(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

//! Text rendering for terminal display.

use chrono::FixedOffset;
use machi_explorer::{
    domain::{
        ChatMessage, City, CityId, MapViewport, MessageKind, WeatherForecast, WeatherSnapshot,
    },
    usecase::Overlay,
};
use machi_shared::time::timestamp_to_clock_time;

const RULE: &str = "============================================================";

pub const HELP: &str = "\
Commands:
  /list                 show the cities matching the current search
  /search <query>       filter cities by name or country (empty clears)
  /select <id|name>     select a city
  /weather              show today's and tomorrow's weather
  /chat                 open the chat room of the selected city
  /close                close the weather panel or the chat
  /join <name>          pick your chat username
  /who                  list online users
  /history              show the chat history
  /export               print the chat transcript as JSON
  /zoom in|out          zoom the map
  /status               show the current state
  /help                 show this help
  /quit                 exit
Any other line is sent to the open chat.
";

/// Formatter for terminal display
pub struct OutputFormatter;

impl OutputFormatter {
    /// Format the city list, marking the selected city
    pub fn format_city_list(cities: &[&City], selected: CityId, query: &str) -> String {
        let mut output = String::new();
        output.push_str(RULE);
        output.push('\n');
        if query.is_empty() {
            output.push_str("Cities:\n");
        } else {
            output.push_str(&format!("Cities matching \"{}\":\n", query));
        }

        if cities.is_empty() {
            output.push_str("(No cities found)\n");
        } else {
            for city in cities {
                let marker = if city.id == selected { "*" } else { " " };
                output.push_str(&format!(
                    "{} {:>2}  {} ({})\n",
                    marker,
                    city.id.value(),
                    city.name,
                    city.country
                ));
            }
        }

        output.push_str(RULE);
        output.push('\n');
        output
    }

    pub fn format_selected(city: &City, viewport: &MapViewport) -> String {
        format!(
            "Selected {}, {} - map centered at {} (zoom {:.1}x)\n",
            city.name,
            city.country,
            viewport.center,
            viewport.zoom.factor()
        )
    }

    fn format_day(label: &str, day: &WeatherSnapshot) -> String {
        format!(
            "  {:<9}{} {:<7}{:>3}°C  humidity {}%  wind {} km/h\n",
            label,
            day.condition.icon(),
            day.condition.label(),
            day.temperature_celsius,
            day.humidity_percent,
            day.wind_speed_kmh
        )
    }

    pub fn format_weather(city: &City, forecast: &WeatherForecast) -> String {
        let mut output = format!("Weather in {}, {}\n", city.name, city.country);
        output.push_str(&Self::format_day("Today", &forecast.today));
        output.push_str(&Self::format_day("Tomorrow", &forecast.tomorrow));
        output
    }

    /// Format a single chat line
    ///
    /// `local_user` marks the local user's own messages with "(me)".
    pub fn format_message(
        message: &ChatMessage,
        local_user: Option<&str>,
        offset: FixedOffset,
    ) -> String {
        let time = timestamp_to_clock_time(message.sent_at.value(), offset);
        match message.kind {
            MessageKind::System => format!("[{}] * {}\n", time, message.body),
            MessageKind::Local if local_user == Some(message.author.as_str()) => {
                format!("[{}] {} (me): {}\n", time, message.author, message.body)
            }
            MessageKind::Local | MessageKind::Simulated => {
                format!("[{}] {}: {}\n", time, message.author, message.body)
            }
        }
    }

    pub fn format_history(
        messages: &[ChatMessage],
        local_user: Option<&str>,
        offset: FixedOffset,
    ) -> String {
        messages
            .iter()
            .map(|message| Self::format_message(message, local_user, offset))
            .collect()
    }

    /// Format the online list, with the local user first once joined
    pub fn format_roster(users: &[String], local_user: Option<&str>) -> String {
        let mut output = format!("Online ({}):\n", users.len() + usize::from(local_user.is_some()));
        if let Some(me) = local_user {
            output.push_str(&format!("  {} (me)\n", me));
        }
        for user in users {
            output.push_str(&format!("  {}\n", user));
        }
        output
    }

    pub fn format_chat_opened(city: &City, joined_as: Option<&str>) -> String {
        match joined_as {
            Some(name) => format!("Back in {} chat as '{}'.\n", city.name, name),
            None => format!(
                "Joined {} chat room. Pick a username with /join <name> to start talking.\n",
                city.name
            ),
        }
    }

    pub fn format_status(
        city: &City,
        viewport: &MapViewport,
        overlay: Overlay,
        query: &str,
        chat_user: Option<&str>,
    ) -> String {
        let overlay = match overlay {
            Overlay::None => "none".to_string(),
            Overlay::Weather => "weather".to_string(),
            Overlay::Chat => match chat_user {
                Some(name) => format!("chat (as {})", name),
                None => "chat (not joined)".to_string(),
            },
        };
        format!(
            "City: {} ({})\nSearch: {}\nZoom: {:.1}x\nOverlay: {}\n",
            city.name,
            city.id,
            if query.is_empty() { "(none)" } else { query },
            viewport.zoom.factor(),
            overlay
        )
    }
}

#[cfg(test)]
mod tests {
    use machi_explorer::domain::{Coordinates, Timestamp, WeatherCondition, ZoomLevel};

    use super::*;

    fn jst() -> FixedOffset {
        FixedOffset::east_opt(9 * 3600).unwrap()
    }

    fn tokyo() -> City {
        City::new(
            CityId::new(1),
            "Tokyo",
            "Japan",
            Coordinates::new(35.6762, 139.6503),
        )
    }

    fn paris() -> City {
        City::new(
            CityId::new(4),
            "Paris",
            "France",
            Coordinates::new(48.8566, 2.3522),
        )
    }

    #[test]
    fn test_format_city_list_marks_selection() {
        // テスト項目: 選択中の都市に印が付く
        // given (前提条件):
        let first = tokyo();
        let second = paris();
        let cities = vec![&first, &second];

        // when (操作):
        let result = OutputFormatter::format_city_list(&cities, CityId::new(4), "");

        // then (期待する結果):
        assert!(result.contains("Cities:"));
        assert!(result.contains("   1  Tokyo (Japan)"));
        assert!(result.contains("*  4  Paris (France)"));
    }

    #[test]
    fn test_format_city_list_with_no_match() {
        // テスト項目: 該当する都市がない場合はその旨が表示される
        // given (前提条件):
        let cities: Vec<&City> = vec![];

        // when (操作):
        let result = OutputFormatter::format_city_list(&cities, CityId::new(1), "zz");

        // then (期待する結果):
        assert!(result.contains("Cities matching \"zz\":"));
        assert!(result.contains("(No cities found)"));
    }

    #[test]
    fn test_format_weather_shows_both_days() {
        // テスト項目: 今日と明日の天気が表示される
        // given (前提条件):
        let day = |temperature_celsius, condition| WeatherSnapshot {
            temperature_celsius,
            condition,
            humidity_percent: 55,
            wind_speed_kmh: 12,
        };
        let forecast = WeatherForecast {
            today: day(21, WeatherCondition::Sunny),
            tomorrow: day(8, WeatherCondition::Snowy),
        };

        // when (操作):
        let result = OutputFormatter::format_weather(&tokyo(), &forecast);

        // then (期待する結果):
        assert!(result.starts_with("Weather in Tokyo, Japan"));
        assert!(result.contains("Today"));
        assert!(result.contains("sunny"));
        assert!(result.contains(" 21°C"));
        assert!(result.contains("Tomorrow"));
        assert!(result.contains("❄️"));
        assert!(result.contains("humidity 55%"));
        assert!(result.contains("wind 12 km/h"));
    }

    #[test]
    fn test_format_message_by_kind() {
        // テスト項目: メッセージの種類ごとに表示が変わる
        // given (前提条件):
        // 2023-01-01 09:05 JST
        let at = Timestamp::new(1672531530000);
        let system = ChatMessage::new(MessageKind::System, "System", "Welcome!", "Tokyo", at);
        let mine = ChatMessage::new(MessageKind::Local, "Alice", "Hello", "Tokyo", at);
        let peer = ChatMessage::new(MessageKind::Simulated, "TravelBug", "Hi", "Tokyo", at);

        // when (操作):
        let system = OutputFormatter::format_message(&system, Some("Alice"), jst());
        let mine = OutputFormatter::format_message(&mine, Some("Alice"), jst());
        let peer = OutputFormatter::format_message(&peer, Some("Alice"), jst());

        // then (期待する結果):
        assert_eq!(system, "[09:05] * Welcome!\n");
        assert_eq!(mine, "[09:05] Alice (me): Hello\n");
        assert_eq!(peer, "[09:05] TravelBug: Hi\n");
    }

    #[test]
    fn test_format_roster_lists_local_user_first() {
        // テスト項目: 参加済みなら自分が先頭に表示される
        // given (前提条件):
        let users = vec!["CityLover".to_string(), "TravelBug".to_string()];

        // when (操作):
        let joined = OutputFormatter::format_roster(&users, Some("Alice"));
        let unjoined = OutputFormatter::format_roster(&users, None);

        // then (期待する結果):
        assert!(joined.starts_with("Online (3):\n  Alice (me)\n"));
        assert!(unjoined.starts_with("Online (2):\n  CityLover\n"));
    }

    #[test]
    fn test_help_lists_every_command() {
        // テスト項目: ヘルプに全てのコマンドが載っている
        // given (前提条件):
        let commands = [
            "/list", "/search", "/select", "/weather", "/chat", "/close", "/join", "/who",
            "/history", "/export", "/zoom", "/status", "/help", "/quit",
        ];

        // when (操作) / then (期待する結果):
        for command in commands {
            assert!(HELP.contains(command), "{command} is missing from help");
        }
    }

    #[test]
    fn test_format_status() {
        // テスト項目: 現在の状態がまとめて表示される
        // given (前提条件):
        let city = tokyo();
        let mut viewport = MapViewport::new(city.coordinates);
        viewport.zoom = ZoomLevel::MAX;

        // when (操作):
        let result =
            OutputFormatter::format_status(&city, &viewport, Overlay::Chat, "", Some("Alice"));

        // then (期待する結果):
        assert!(result.contains("City: Tokyo (1)"));
        assert!(result.contains("Search: (none)"));
        assert!(result.contains("Zoom: 2.0x"));
        assert!(result.contains("Overlay: chat (as Alice)"));
    }
}

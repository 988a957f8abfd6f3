//! Chat room aggregate.
//!
//! A room is bound to one city for its whole life. It owns the message history,
//! the simulated roster and the local user's identity. The history only grows:
//! messages are appended in arrival order and never removed or reordered.
//!
//! ## State
//!
//! - Unjoined: `local_user` is `None`; posting is rejected
//! - Joined: `local_user` is set; posting appends a local message
//! - Closed: nothing can be appended any more

use super::{ChatMessage, City, MessageBody, MessageKind, RoomError, Timestamp, Username};

/// Author name of room announcements
pub const SYSTEM_AUTHOR: &str = "System";

/// Simulated peers shown as online in every room
pub const SIMULATED_USERS: [&str; 4] = ["WeatherExplorer", "CityLover", "TravelBug", "LocalGuide"];

/// Bodies of simulated messages; `{city}` is replaced by the room's city name.
pub const CHATTER_TEMPLATES: [&str; 6] = [
    "I love visiting {city}!",
    "The weather in {city} is amazing today",
    "Anyone know good restaurants in {city}?",
    "Just arrived in {city}, any recommendations?",
    "The culture in {city} is fascinating",
    "Planning a trip to {city} next month",
];

/// Render the chatter template at `index` for `city_name`.
///
/// Out-of-range indices wrap around.
pub fn render_chatter(index: usize, city_name: &str) -> String {
    CHATTER_TEMPLATES[index % CHATTER_TEMPLATES.len()].replace("{city}", city_name)
}

fn welcome_text(city_name: &str) -> String {
    format!("Welcome to {city_name} chat! Share your thoughts about this amazing city.")
}

/// Chat room bound to a single city
#[derive(Debug, Clone)]
pub struct ChatRoom {
    city: City,
    messages: Vec<ChatMessage>,
    roster: Vec<String>,
    local_user: Option<Username>,
    closed: bool,
}

impl ChatRoom {
    /// Open a room for `city`, seeded with the welcome message.
    pub fn open(city: City, opened_at: Timestamp) -> Self {
        let welcome = ChatMessage::new(
            MessageKind::System,
            SYSTEM_AUTHOR,
            welcome_text(&city.name),
            city.name.clone(),
            opened_at,
        );
        Self {
            city,
            messages: vec![welcome],
            roster: SIMULATED_USERS.iter().map(|name| name.to_string()).collect(),
            local_user: None,
            closed: false,
        }
    }

    pub fn city(&self) -> &City {
        &self.city
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn roster(&self) -> &[String] {
        &self.roster
    }

    pub fn local_user(&self) -> Option<&Username> {
        self.local_user.as_ref()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Join as `username`. The identity cannot be changed afterwards.
    pub fn join(&mut self, username: Username) -> Result<(), RoomError> {
        if self.closed {
            return Err(RoomError::Closed);
        }
        if let Some(current) = &self.local_user {
            return Err(RoomError::AlreadyJoined(current.as_str().to_string()));
        }
        self.local_user = Some(username);
        Ok(())
    }

    /// Append a message from the local user.
    pub fn post(&mut self, body: MessageBody, at: Timestamp) -> Result<ChatMessage, RoomError> {
        if self.closed {
            return Err(RoomError::Closed);
        }
        let author = self
            .local_user
            .as_ref()
            .ok_or(RoomError::NotJoined)?
            .as_str()
            .to_string();
        let message = ChatMessage::new(
            MessageKind::Local,
            author,
            body.into_string(),
            self.city.name.clone(),
            at,
        );
        self.messages.push(message.clone());
        Ok(message)
    }

    /// Append a simulated message from the roster member at `author_index`
    /// using the chatter template at `template_index`.
    pub fn post_simulated(
        &mut self,
        author_index: usize,
        template_index: usize,
        at: Timestamp,
    ) -> Result<ChatMessage, RoomError> {
        if self.closed {
            return Err(RoomError::Closed);
        }
        let author = self.roster[author_index % self.roster.len()].clone();
        let message = ChatMessage::new(
            MessageKind::Simulated,
            author,
            render_chatter(template_index, &self.city.name),
            self.city.name.clone(),
            at,
        );
        self.messages.push(message.clone());
        Ok(message)
    }

    /// Close the room. Idempotent.
    pub fn close(&mut self) {
        self.closed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CityId, Coordinates};

    fn tokyo_room() -> ChatRoom {
        let city = City::new(
            CityId::new(1),
            "Tokyo",
            "Japan",
            Coordinates::new(35.6762, 139.6503),
        );
        ChatRoom::open(city, Timestamp::new(1000))
    }

    #[test]
    fn test_open_seeds_welcome_message() {
        // テスト項目: ルーム作成時に System のウェルカムメッセージが1件だけ入る
        // given (前提条件) / when (操作):
        let room = tokyo_room();

        // then (期待する結果):
        assert_eq!(room.messages().len(), 1);
        let welcome = &room.messages()[0];
        assert_eq!(welcome.author, SYSTEM_AUTHOR);
        assert_eq!(welcome.kind, MessageKind::System);
        assert!(welcome.body.contains("Tokyo"));
        assert_eq!(welcome.city, "Tokyo");
        assert_eq!(room.roster(), SIMULATED_USERS);
    }

    #[test]
    fn test_post_before_join_is_rejected() {
        // テスト項目: 参加前の投稿は NotJoined で拒否される
        // given (前提条件):
        let mut room = tokyo_room();

        // when (操作):
        let result = room.post(MessageBody::new("Hello").unwrap(), Timestamp::new(2000));

        // then (期待する結果):
        assert_eq!(result, Err(RoomError::NotJoined));
        assert_eq!(room.messages().len(), 1);
    }

    #[test]
    fn test_post_after_join_appends_local_message() {
        // テスト項目: 参加後の投稿はローカルユーザーのメッセージとして追加される
        // given (前提条件):
        let mut room = tokyo_room();
        room.join(Username::new("Alice").unwrap()).unwrap();

        // when (操作):
        let message = room
            .post(MessageBody::new("Hello").unwrap(), Timestamp::new(2000))
            .unwrap();

        // then (期待する結果):
        assert_eq!(message.author, "Alice");
        assert_eq!(message.body, "Hello");
        assert_eq!(message.kind, MessageKind::Local);
        assert_eq!(message.sent_at, Timestamp::new(2000));
        assert_eq!(room.messages().last(), Some(&message));
    }

    #[test]
    fn test_join_twice_keeps_first_identity() {
        // テスト項目: 2回目の参加は拒否され、最初のユーザー名が維持される
        // given (前提条件):
        let mut room = tokyo_room();
        room.join(Username::new("Alice").unwrap()).unwrap();

        // when (操作):
        let result = room.join(Username::new("Bob").unwrap());

        // then (期待する結果):
        assert_eq!(result, Err(RoomError::AlreadyJoined("Alice".to_string())));
        assert_eq!(room.local_user().map(Username::as_str), Some("Alice"));
    }

    #[test]
    fn test_post_simulated_renders_template() {
        // テスト項目: シミュレーションメッセージは名簿とテンプレートから生成される
        // given (前提条件):
        let mut room = tokyo_room();

        // when (操作):
        let message = room.post_simulated(2, 0, Timestamp::new(3000)).unwrap();

        // then (期待する結果):
        assert_eq!(message.author, "TravelBug");
        assert_eq!(message.body, "I love visiting Tokyo!");
        assert_eq!(message.kind, MessageKind::Simulated);
        assert_eq!(room.messages().len(), 2);
    }

    #[test]
    fn test_closed_room_rejects_every_append() {
        // テスト項目: クローズ後は投稿もシミュレーションも追加されない
        // given (前提条件):
        let mut room = tokyo_room();
        room.join(Username::new("Alice").unwrap()).unwrap();
        room.close();

        // when (操作):
        let posted = room.post(MessageBody::new("Hello").unwrap(), Timestamp::new(2000));
        let simulated = room.post_simulated(0, 0, Timestamp::new(2000));

        // then (期待する結果):
        assert_eq!(posted, Err(RoomError::Closed));
        assert_eq!(simulated, Err(RoomError::Closed));
        assert_eq!(room.messages().len(), 1);
    }

    #[test]
    fn test_render_chatter_wraps_index() {
        // テスト項目: 範囲外のテンプレート番号は折り返される
        // given (前提条件):
        let index = CHATTER_TEMPLATES.len() + 1;

        // when (操作):
        let body = render_chatter(index, "Lagos");

        // then (期待する結果):
        assert_eq!(body, "The weather in Lagos is amazing today");
    }
}

//! UseCase: 都市ごとのチャットセッション
//!
//! ## 責務
//!
//! - 1つの都市に紐づくチャットルームのライフサイクル管理
//! - ユーザー名の設定（参加）とメッセージ送信
//! - シミュレーションされた参加者の発言（一定周期のタイマー）
//!
//! ## 設計ノート
//!
//! ルームの状態は 1 つの `Mutex` で守られています。ローカル送信、タイマーによる
//! 追加、クローズはすべてこのロックの中で行われるため、メッセージ履歴の順序と
//! イベントの配信順序は常に一致します。
//!
//! タイマーのタスクは追加の直前にロックの中でクローズ済みかを確認します。
//! そのため `close()` が返った後に、実行中だったティックがメッセージを
//! 追加することはありません。

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures_util::{
    StreamExt,
    stream::{self, BoxStream},
};
use machi_shared::time::Clock;
use tokio::{
    sync::broadcast::{self, error::RecvError},
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};

use crate::domain::{
    CHATTER_TEMPLATES, ChatMessage, ChatRoom, City, MessageBody, RandomSource, RoomError,
    SIMULATED_USERS, Timestamp, Username,
};

use super::ActivityConfig;

/// Buffered events per subscriber before it starts lagging
const EVENT_CAPACITY: usize = 256;

/// Messages appended to a session after subscribing, in append order
pub type ChatEvents = BoxStream<'static, ChatMessage>;

fn lock_room(room: &Mutex<ChatRoom>) -> MutexGuard<'_, ChatRoom> {
    room.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Live chat room for one city
///
/// Must be opened inside a Tokio runtime. Closing or dropping the session
/// stops the simulated activity for good.
pub struct ChatSession {
    city: City,
    room: Arc<Mutex<ChatRoom>>,
    events: Option<broadcast::Sender<ChatMessage>>,
    clock: Arc<dyn Clock>,
    activity: JoinHandle<()>,
}

impl ChatSession {
    /// Open a room for `city` and start its simulated peers.
    pub fn open(
        city: City,
        config: ActivityConfig,
        random: Box<dyn RandomSource>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let room = Arc::new(Mutex::new(ChatRoom::open(
            city.clone(),
            Timestamp::new(clock.now_millis()),
        )));
        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        let activity = tokio::spawn(run_activity(
            room.clone(),
            events.clone(),
            config,
            random,
            clock.clone(),
        ));

        tracing::info!(
            "Chat session for {} opened (tick every {:?}, p = {})",
            city.name,
            config.tick_period(),
            config.probability()
        );

        Self {
            city,
            room,
            events: Some(events),
            clock,
            activity,
        }
    }

    pub fn city(&self) -> &City {
        &self.city
    }

    /// Join the room as `name`.
    ///
    /// Returns `true` when this call joined the session. Blank names, a second
    /// join and a closed session are ignored.
    pub fn set_username(&self, name: &str) -> bool {
        let username = match Username::new(name) {
            Ok(username) => username,
            Err(e) => {
                tracing::debug!("Ignoring username {:?}: {}", name, e);
                return false;
            }
        };

        let mut room = lock_room(&self.room);
        match room.join(username) {
            Ok(()) => {
                tracing::info!(
                    "Joined {} chat as '{}'",
                    self.city.name,
                    room.local_user().map(Username::as_str).unwrap_or_default()
                );
                true
            }
            Err(e) => {
                tracing::debug!("Ignoring username {:?}: {}", name, e);
                false
            }
        }
    }

    /// Send `body` as the local user.
    ///
    /// Returns the appended message, or `None` when the input was ignored
    /// (blank body, not joined yet, session closed).
    pub fn send_message(&self, body: &str) -> Option<ChatMessage> {
        let body = match MessageBody::new(body) {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!("Ignoring message: {}", e);
                return None;
            }
        };

        let mut room = lock_room(&self.room);
        match room.post(body, Timestamp::new(self.clock.now_millis())) {
            Ok(message) => {
                self.publish(&message);
                Some(message)
            }
            Err(e) => {
                tracing::debug!("Ignoring message: {}", e);
                None
            }
        }
    }

    /// Snapshot of the history, oldest first
    pub fn messages(&self) -> Vec<ChatMessage> {
        lock_room(&self.room).messages().to_vec()
    }

    pub fn message_count(&self) -> usize {
        lock_room(&self.room).messages().len()
    }

    /// Simulated users shown as online
    pub fn online_users(&self) -> Vec<String> {
        lock_room(&self.room).roster().to_vec()
    }

    /// The local user's name, once joined
    pub fn username(&self) -> Option<String> {
        lock_room(&self.room)
            .local_user()
            .map(|username| username.as_str().to_string())
    }

    pub fn is_joined(&self) -> bool {
        lock_room(&self.room).local_user().is_some()
    }

    pub fn is_closed(&self) -> bool {
        lock_room(&self.room).is_closed()
    }

    /// Stream of messages appended from now on, local and simulated alike.
    ///
    /// The stream ends once the session is closed.
    pub fn subscribe(&self) -> ChatEvents {
        let Some(events) = &self.events else {
            return stream::empty().boxed();
        };
        stream::unfold(events.subscribe(), |mut receiver| async move {
            loop {
                match receiver.recv().await {
                    Ok(message) => return Some((message, receiver)),
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!("Chat subscriber lagged, skipped {} messages", skipped);
                    }
                    Err(RecvError::Closed) => return None,
                }
            }
        })
        .boxed()
    }

    /// Tear the session down. Idempotent.
    ///
    /// Once this returns no message is ever appended again, even by a tick that
    /// was already running.
    pub fn close(&mut self) {
        let newly_closed = {
            let mut room = lock_room(&self.room);
            let was_closed = room.is_closed();
            room.close();
            !was_closed
        };
        self.activity.abort();
        self.events = None;

        if newly_closed {
            tracing::info!("Chat session for {} closed", self.city.name);
        }
    }

    /// Broadcast `message`; called with the room lock held.
    fn publish(&self, message: &ChatMessage) {
        if let Some(events) = &self.events {
            // No subscribers is fine.
            let _ = events.send(message.clone());
        }
    }
}

impl Drop for ChatSession {
    fn drop(&mut self) {
        self.close();
    }
}

/// Periodically append simulated messages until the room closes.
async fn run_activity(
    room: Arc<Mutex<ChatRoom>>,
    events: broadcast::Sender<ChatMessage>,
    config: ActivityConfig,
    mut random: Box<dyn RandomSource>,
    clock: Arc<dyn Clock>,
) {
    let period = config.tick_period();
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        if lock_room(&room).is_closed() {
            break;
        }
        if !random.chance(config.probability()) {
            tracing::debug!("Activity tick: quiet");
            continue;
        }
        let author_index = random.pick_index(SIMULATED_USERS.len());
        let template_index = random.pick_index(CHATTER_TEMPLATES.len());

        let mut guard = lock_room(&room);
        match guard.post_simulated(
            author_index,
            template_index,
            Timestamp::new(clock.now_millis()),
        ) {
            Ok(message) => {
                tracing::debug!("Activity tick: {} says {:?}", message.author, message.body);
                let _ = events.send(message);
            }
            Err(RoomError::Closed) => break,
            Err(e) => tracing::warn!("Activity tick failed: {}", e),
        }
    }

    tracing::debug!("Activity task stopped");
}

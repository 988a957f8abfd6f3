//! Domain layer: value objects, the chat room aggregate and the seams
//! (random source) that the use cases depend on.

mod city;
mod error;
mod map;
mod message;
mod random;
mod room;
mod weather;

pub use city::{City, CityId, Coordinates};
pub use error::{RoomError, ValidationError};
pub use map::{MapViewport, ZoomLevel};
pub use message::{
    ChatMessage, MAX_BODY_CHARS, MAX_USERNAME_CHARS, MessageBody, MessageId, MessageKind,
    Timestamp, Username,
};
pub use random::{RandomProvider, RandomSource};
pub use room::{CHATTER_TEMPLATES, ChatRoom, SIMULATED_USERS, SYSTEM_AUTHOR, render_chatter};
pub use weather::{
    HUMIDITY_RANGE, TEMPERATURE_RANGE, WIND_SPEED_RANGE, WeatherCondition, WeatherForecast,
    WeatherSnapshot,
};

#[cfg(test)]
pub use random::MockRandomSource;

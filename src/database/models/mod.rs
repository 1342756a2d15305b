pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;

pub use character::Character;
pub use favorite::{FavoriteCharacter, FavoritePlanet};
pub use planet::Planet;
pub use user::{User, UserFavoritesResponse, UserResponse};

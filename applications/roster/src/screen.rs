/// Text rendering of the character list
use crate::commands::{Command, HELP};
use crate::favorites::FavoriteToggles;
use roster_catalog::CharacterRecord;
use roster_list::CharacterList;

/// What the shell should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Print(String),
    Quit,
}

/// The character list as shown to the user, plus its favorite flags.
#[derive(Debug, Default)]
pub struct Screen {
    list: CharacterList,
    favorites: FavoriteToggles,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a newly published snapshot. Favorite flags are kept.
    pub fn show(&mut self, list: CharacterList) {
        self.list = list;
    }

    pub fn list(&self) -> &CharacterList {
        &self.list
    }

    pub fn favorites(&self) -> &FavoriteToggles {
        &self.favorites
    }

    pub fn render(&self) -> String {
        if self.list.is_empty() {
            return "No characters loaded.\n".to_string();
        }

        let mut out = String::new();
        for character in &self.list {
            out.push_str(&render_card(
                character,
                self.favorites.is_favorite(character.id),
            ));
            out.push('\n');
        }
        out
    }

    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::ToggleFavorite(id) => match self.list.find(id) {
                Some(character) => {
                    let name = character.name.clone();
                    if self.favorites.toggle(id) {
                        Outcome::Print(format!("★ {} added to favorites\n", name))
                    } else {
                        Outcome::Print(format!("☆ {} removed from favorites\n", name))
                    }
                }
                None => Outcome::Print(format!("No character with id {}\n", id)),
            },
            Command::List => Outcome::Print(self.render()),
            Command::Help => Outcome::Print(format!("{}\n", HELP)),
            Command::Quit => Outcome::Quit,
        }
    }
}

/// One character card
pub fn render_card(character: &CharacterRecord, favorite: bool) -> String {
    let star = if favorite { '★' } else { '☆' };

    format!(
        "{} #{} {}\n    Status: {}\n    Species: {}\n    Image: {}\n",
        star,
        character.id,
        character.name,
        character.status,
        character.species,
        character.image_url
    )
}

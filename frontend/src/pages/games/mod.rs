mod frontend_hangman_game;

pub use frontend_hangman_game::FrontendHangmanGame;

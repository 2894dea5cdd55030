pub mod backend_hangman_game;

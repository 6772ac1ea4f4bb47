pub mod menu_roulette;

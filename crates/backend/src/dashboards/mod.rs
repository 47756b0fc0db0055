pub mod d100_marketing_overview;

pub mod article_card;

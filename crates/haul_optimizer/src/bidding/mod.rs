pub mod auction_bidder;
pub mod bid;

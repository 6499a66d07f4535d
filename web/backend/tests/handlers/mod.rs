mod path;
mod search;
mod stats;

mod fundamentals;
mod history;
mod profile;
mod snapshot;

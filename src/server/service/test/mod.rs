mod country;
mod mission;
mod store;
mod topic;

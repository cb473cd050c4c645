mod contact;
mod user;

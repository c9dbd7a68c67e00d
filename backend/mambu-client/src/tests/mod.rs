mod attachments;
mod config;
mod dates;
mod dispatcher;
mod logger;
mod url_builder;

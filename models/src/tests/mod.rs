mod body;
mod record;
mod schema;

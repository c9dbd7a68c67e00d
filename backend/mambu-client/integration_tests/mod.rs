mod attachments;
mod clients;
mod custom_fields;
mod dispatcher;
mod helpers;
mod loan_products;
mod loan_transactions;
mod loans;
mod savings;

mod catalog;
mod integration;

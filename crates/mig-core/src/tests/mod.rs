mod models;
mod reconciler;

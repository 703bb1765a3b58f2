mod delete;
mod edit;
mod load;
mod submit;
mod update_progress;

mod errors;
mod navigation;

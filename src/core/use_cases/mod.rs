mod search_images;

pub use search_images::SearchImagesInteractor;

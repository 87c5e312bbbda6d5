use crate::core::types::Colour;
use derivative::Derivative;
use getset::{CopyGetters, Getters};
use std::ops::{Deref, DerefMut, Index, IndexMut};

#[derive(CopyGetters, Getters, Derivative, Clone)]
#[derivative(Debug)]
pub struct Image<Col = Colour> {
    #[get_copy = "pub"]
    width: usize,
    #[get_copy = "pub"]
    height: usize,
    #[derivative(Debug = "ignore")]
    #[get = "pub"]
    data: Box<[Col]>,
}

// region Constructors

impl<Col: Clone> Image<Col> {
    /// Creates a new image with the specified dimensions, and the given fill pixel value
    pub fn new_filled(width: usize, height: usize, fill: Col) -> Self {
        Self::new_from(width, height, vec![fill; width * height])
    }
}

impl<Col> Image<Col> {
    /// Creates an image from the image's dimensions, and a slice of pixels
    ///
    /// # Panics
    /// The length of the `data` must be equal to the number of pixels `width * height`.
    pub fn new_from(width: usize, height: usize, data: impl Into<Box<[Col]>>) -> Self {
        let data = data.into();
        assert_eq!(data.len(), width * height, "number of pixels does not match dimensions");
        Self { width, height, data }
    }

    /// Creates an image from the image's dimensions, using the given function to calculate pixel values
    ///
    /// Pixels are evaluated row by row, top to bottom.
    pub fn from_fn(width: usize, height: usize, mut func: impl FnMut(usize, usize) -> Col) -> Self {
        let data = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| func(x, y))
            .collect::<Vec<_>>();
        Self::new_from(width, height, data)
    }
}

// endregion Constructors

// region Helpers

impl<Col> Image<Col> {
    /// Number of pixels in the image
    pub fn len(&self) -> usize { self.data.len() }
    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    fn compress_index(&self, (x, y): (usize, usize)) -> usize {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        y * self.width + x
    }

    /// Iterates over the pixels, along with the `(x, y)` coordinates of each
    pub fn indexed_iter(&self) -> impl Iterator<Item = ((usize, usize), &Col)> {
        let width = self.width;
        self.data.iter().enumerate().map(move |(i, c)| ((i % width, i / width), c))
    }
}

impl<Col> Index<(usize, usize)> for Image<Col> {
    type Output = Col;
    fn index(&self, coords: (usize, usize)) -> &Self::Output { &self.data[self.compress_index(coords)] }
}

impl<Col> IndexMut<(usize, usize)> for Image<Col> {
    fn index_mut(&mut self, coords: (usize, usize)) -> &mut Self::Output {
        let idx = self.compress_index(coords);
        &mut self.data[idx]
    }
}

impl<Col> Deref for Image<Col> {
    type Target = [Col];
    fn deref(&self) -> &Self::Target { &self.data }
}

impl<Col> DerefMut for Image<Col> {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.data }
}

// endregion Helpers

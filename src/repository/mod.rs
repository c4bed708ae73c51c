//! Repository layer: in-memory stores behind the catalog

pub mod books;
pub mod loans;
pub mod reservations;
pub mod title_index;

pub use books::BooksRepository;
pub use loans::LoansRepository;
pub use reservations::ReservationsRepository;
pub use title_index::TitleIndex;

/// Main repository struct holding every store the catalog works on.
///
/// Lending and returning touch several stores in one call, so they are only
/// ever mutated together through `&mut Repository`.
#[derive(Debug, Clone, Default)]
pub struct Repository {
    pub books: BooksRepository,
    pub titles: TitleIndex,
    pub reservations: ReservationsRepository,
    pub loans: LoansRepository,
}

impl Repository {
    pub fn new() -> Self {
        Self::default()
    }
}

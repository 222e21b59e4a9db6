//! Genre service.

use crate::dto::{CreateGenreRequest, GenreResponse, UpdateGenreRequest};
use async_trait::async_trait;
use biblioteca_core::{BibliotecaError, BibliotecaResult, Genre, GenreId, ValidateExt};
use biblioteca_repository::GenreRepository;
use std::sync::Arc;
use tracing::{debug, info};

/// Genre service trait.
#[async_trait]
pub trait GenreService: Send + Sync {
    /// Creates a new genre.
    async fn create_genre(&self, request: CreateGenreRequest) -> BibliotecaResult<GenreResponse>;

    /// Lists all genres.
    async fn list_genres(&self) -> BibliotecaResult<Vec<GenreResponse>>;

    /// Gets a genre by ID.
    async fn get_genre(&self, id: GenreId) -> BibliotecaResult<GenreResponse>;

    /// Updates a genre.
    async fn update_genre(
        &self,
        id: GenreId,
        request: UpdateGenreRequest,
    ) -> BibliotecaResult<GenreResponse>;

    /// Deletes a genre. Books referencing it keep a dangling reference.
    async fn delete_genre(&self, id: GenreId) -> BibliotecaResult<()>;
}

/// Genre service implementation.
pub struct GenreServiceImpl {
    genres: Arc<dyn GenreRepository>,
}

impl GenreServiceImpl {
    /// Creates a new genre service.
    pub fn new(genres: Arc<dyn GenreRepository>) -> Self {
        Self { genres }
    }
}

#[async_trait]
impl GenreService for GenreServiceImpl {
    async fn create_genre(&self, request: CreateGenreRequest) -> BibliotecaResult<GenreResponse> {
        debug!("Creating genre: {}", request.name);

        request.validate_request()?;

        let genre = Genre::new(request.name);
        let saved = self.genres.save(&genre).await?;

        info!("Genre created: {}", saved.id);
        Ok(GenreResponse::from(saved))
    }

    async fn list_genres(&self) -> BibliotecaResult<Vec<GenreResponse>> {
        let genres = self.genres.find_all().await?;
        Ok(genres.into_iter().map(GenreResponse::from).collect())
    }

    async fn get_genre(&self, id: GenreId) -> BibliotecaResult<GenreResponse> {
        debug!("Getting genre: {}", id);

        let genre = self
            .genres
            .find_by_id(id)
            .await?
            .ok_or_else(|| BibliotecaError::not_found("Genero", id))?;

        Ok(GenreResponse::from(genre))
    }

    async fn update_genre(
        &self,
        id: GenreId,
        request: UpdateGenreRequest,
    ) -> BibliotecaResult<GenreResponse> {
        debug!("Updating genre: {}", id);

        request.validate_request()?;

        let mut genre = self
            .genres
            .find_by_id(id)
            .await?
            .ok_or_else(|| BibliotecaError::not_found("Genero", id))?;

        genre.rename(request.name);

        let updated = self
            .genres
            .update(&genre)
            .await?
            .ok_or_else(|| BibliotecaError::not_found("Genero", id))?;

        info!("Genre updated: {}", id);
        Ok(GenreResponse::from(updated))
    }

    async fn delete_genre(&self, id: GenreId) -> BibliotecaResult<()> {
        debug!("Deleting genre: {}", id);

        let deleted = self.genres.delete(id).await?;
        if !deleted {
            return Err(BibliotecaError::not_found("Genero", id));
        }

        info!("Genre deleted: {}", id);
        Ok(())
    }
}

impl std::fmt::Debug for GenreServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenreServiceImpl").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use biblioteca_repository::MemoryGenreRepository;

    fn service() -> GenreServiceImpl {
        GenreServiceImpl::new(Arc::new(MemoryGenreRepository::new()))
    }

    #[tokio::test]
    async fn test_create_and_get_genre() {
        let service = service();

        let created = service
            .create_genre(CreateGenreRequest { name: "Romance".to_string() })
            .await
            .unwrap();

        let fetched = service.get_genre(created.id).await.unwrap();
        assert_eq!(fetched.name, "Romance");
    }

    #[tokio::test]
    async fn test_create_genre_blank_name() {
        let service = service();

        let result = service
            .create_genre(CreateGenreRequest { name: String::new() })
            .await;
        assert!(matches!(result.unwrap_err(), BibliotecaError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_genre() {
        let service = service();
        let created = service
            .create_genre(CreateGenreRequest { name: "Romanse".to_string() })
            .await
            .unwrap();

        let updated = service
            .update_genre(created.id, UpdateGenreRequest { name: "Romance".to_string() })
            .await
            .unwrap();
        assert_eq!(updated.name, "Romance");
    }

    #[tokio::test]
    async fn test_delete_then_get_genre() {
        let service = service();
        let created = service
            .create_genre(CreateGenreRequest { name: "Efêmero".to_string() })
            .await
            .unwrap();

        service.delete_genre(created.id).await.unwrap();

        let result = service.get_genre(created.id).await;
        assert!(matches!(result.unwrap_err(), BibliotecaError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_genre_not_found() {
        let service = service();
        let result = service.delete_genre(GenreId::new()).await;
        assert!(matches!(result.unwrap_err(), BibliotecaError::NotFound { .. }));
    }
}

//! Author service.

use crate::dto::{AuthorResponse, CreateAuthorRequest, UpdateAuthorRequest};
use async_trait::async_trait;
use biblioteca_core::{Author, AuthorId, BibliotecaError, BibliotecaResult, ValidateExt};
use biblioteca_repository::AuthorRepository;
use std::sync::Arc;
use tracing::{debug, info};

/// Author service trait.
#[async_trait]
pub trait AuthorService: Send + Sync {
    /// Creates a new author.
    async fn create_author(&self, request: CreateAuthorRequest) -> BibliotecaResult<AuthorResponse>;

    /// Lists all authors.
    async fn list_authors(&self) -> BibliotecaResult<Vec<AuthorResponse>>;

    /// Gets an author by ID.
    async fn get_author(&self, id: AuthorId) -> BibliotecaResult<AuthorResponse>;

    /// Updates an author.
    async fn update_author(
        &self,
        id: AuthorId,
        request: UpdateAuthorRequest,
    ) -> BibliotecaResult<AuthorResponse>;

    /// Deletes an author.
    ///
    /// Books referencing the author are left untouched; their reference
    /// dangles and resolves to `null` on subsequent reads.
    async fn delete_author(&self, id: AuthorId) -> BibliotecaResult<()>;
}

/// Author service implementation.
pub struct AuthorServiceImpl {
    authors: Arc<dyn AuthorRepository>,
}

impl AuthorServiceImpl {
    /// Creates a new author service.
    pub fn new(authors: Arc<dyn AuthorRepository>) -> Self {
        Self { authors }
    }
}

#[async_trait]
impl AuthorService for AuthorServiceImpl {
    async fn create_author(&self, request: CreateAuthorRequest) -> BibliotecaResult<AuthorResponse> {
        debug!("Creating author: {}", request.name);

        request.validate_request()?;

        let author = Author::new(request.name);
        let saved = self.authors.save(&author).await?;

        info!("Author created: {}", saved.id);
        Ok(AuthorResponse::from(saved))
    }

    async fn list_authors(&self) -> BibliotecaResult<Vec<AuthorResponse>> {
        let authors = self.authors.find_all().await?;
        Ok(authors.into_iter().map(AuthorResponse::from).collect())
    }

    async fn get_author(&self, id: AuthorId) -> BibliotecaResult<AuthorResponse> {
        debug!("Getting author: {}", id);

        let author = self
            .authors
            .find_by_id(id)
            .await?
            .ok_or_else(|| BibliotecaError::not_found("Autor", id))?;

        Ok(AuthorResponse::from(author))
    }

    async fn update_author(
        &self,
        id: AuthorId,
        request: UpdateAuthorRequest,
    ) -> BibliotecaResult<AuthorResponse> {
        debug!("Updating author: {}", id);

        request.validate_request()?;

        let mut author = self
            .authors
            .find_by_id(id)
            .await?
            .ok_or_else(|| BibliotecaError::not_found("Autor", id))?;

        author.rename(request.name);

        let updated = self
            .authors
            .update(&author)
            .await?
            .ok_or_else(|| BibliotecaError::not_found("Autor", id))?;

        info!("Author updated: {}", id);
        Ok(AuthorResponse::from(updated))
    }

    async fn delete_author(&self, id: AuthorId) -> BibliotecaResult<()> {
        debug!("Deleting author: {}", id);

        let deleted = self.authors.delete(id).await?;
        if !deleted {
            return Err(BibliotecaError::not_found("Autor", id));
        }

        info!("Author deleted: {}", id);
        Ok(())
    }
}

impl std::fmt::Debug for AuthorServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthorServiceImpl").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use biblioteca_repository::MemoryAuthorRepository;

    fn service() -> AuthorServiceImpl {
        AuthorServiceImpl::new(Arc::new(MemoryAuthorRepository::new()))
    }

    #[tokio::test]
    async fn test_create_and_get_author() {
        let service = service();

        let created = service
            .create_author(CreateAuthorRequest {
                name: "Machado de Assis".to_string(),
            })
            .await
            .unwrap();

        let fetched = service.get_author(created.id).await.unwrap();
        assert_eq!(fetched.name, "Machado de Assis");
    }

    #[tokio::test]
    async fn test_create_author_blank_name() {
        let service = service();

        let result = service
            .create_author(CreateAuthorRequest { name: "  ".to_string() })
            .await;
        assert!(matches!(result.unwrap_err(), BibliotecaError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_author() {
        let service = service();
        let created = service
            .create_author(CreateAuthorRequest { name: "Machado".to_string() })
            .await
            .unwrap();

        let updated = service
            .update_author(
                created.id,
                UpdateAuthorRequest { name: "Machado de Assis".to_string() },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Machado de Assis");
    }

    #[tokio::test]
    async fn test_update_author_not_found() {
        let service = service();

        let result = service
            .update_author(
                AuthorId::new(),
                UpdateAuthorRequest { name: "Alguém".to_string() },
            )
            .await;
        assert!(matches!(result.unwrap_err(), BibliotecaError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_author() {
        let service = service();
        let created = service
            .create_author(CreateAuthorRequest { name: "Efêmero".to_string() })
            .await
            .unwrap();

        service.delete_author(created.id).await.unwrap();

        let result = service.get_author(created.id).await;
        assert!(matches!(result.unwrap_err(), BibliotecaError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_author_not_found() {
        let service = service();
        let result = service.delete_author(AuthorId::new()).await;
        assert!(matches!(result.unwrap_err(), BibliotecaError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_authors() {
        let service = service();
        service
            .create_author(CreateAuthorRequest { name: "Machado de Assis".to_string() })
            .await
            .unwrap();
        service
            .create_author(CreateAuthorRequest { name: "Clarice Lispector".to_string() })
            .await
            .unwrap();

        let authors = service.list_authors().await.unwrap();
        assert_eq!(authors.len(), 2);
    }
}

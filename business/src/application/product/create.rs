use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::collection::repository::CollectionRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::shared::permissions::is_staff;

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub collection_repository: Arc<dyn CollectionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        if !is_staff(Some(&params.principal)) {
            return Err(ProductError::Forbidden);
        }

        self.logger
            .info(&format!("Creating product: {}", params.title));

        let product = Product::new(NewProductProps {
            title: params.title,
            slug: params.slug,
            description: params.description,
            unit_price: params.unit_price,
            inventory: params.inventory,
            collection_id: params.collection_id,
        })?;

        self.collection_repository
            .get_by_id(product.collection_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::CollectionNotFound,
                other => ProductError::Repository(other),
            })?;

        self.repository
            .save(&product)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated => ProductError::TitleTaken,
                other => ProductError::Repository(other),
            })?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::collection::model::Collection;
    use crate::domain::shared::permissions::Principal;
    use crate::domain::shared::value_objects::UserId;
    use crate::test_utils::{mock_logger, MockCollectionRepo, MockProductRepo};
    use uuid::Uuid;

    fn params(principal: Principal) -> CreateProductParams {
        CreateProductParams {
            principal,
            title: "Espresso Beans".to_string(),
            slug: None,
            description: None,
            unit_price: 1250,
            inventory: 12,
            collection_id: Uuid::new_v4(),
        }
    }

    fn existing_collections() -> MockCollectionRepo {
        let mut repo = MockCollectionRepo::new();
        repo.expect_get_by_id()
            .returning(|id| Ok(Collection::from_repository(id, "Coffee".into(), None, 0)));
        repo
    }

    #[tokio::test]
    async fn should_create_product_for_staff() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_save().times(1).returning(|_| Ok(()));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            collection_repository: Arc::new(existing_collections()),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(params(Principal::staff(UserId::generate())))
            .await
            .unwrap();

        assert_eq!(product.slug, "espresso-beans");
        assert_eq!(product.price_with_tax(), 1363);
    }

    #[tokio::test]
    async fn should_forbid_customers() {
        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(MockProductRepo::new()),
            collection_repository: Arc::new(MockCollectionRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(Principal::customer(UserId::generate())))
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::Forbidden));
    }

    #[tokio::test]
    async fn should_reject_unknown_collection() {
        let mut collections = MockCollectionRepo::new();
        collections
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_save().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            collection_repository: Arc::new(collections),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(Principal::staff(UserId::generate())))
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::CollectionNotFound));
    }

    #[tokio::test]
    async fn should_reject_negative_price() {
        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(MockProductRepo::new()),
            collection_repository: Arc::new(MockCollectionRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                unit_price: -1,
                ..params(Principal::staff(UserId::generate()))
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NegativePrice));
    }

    #[tokio::test]
    async fn should_map_duplicate_title() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::Duplicated));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            collection_repository: Arc::new(existing_collections()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(Principal::staff(UserId::generate())))
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::TitleTaken));
    }
}

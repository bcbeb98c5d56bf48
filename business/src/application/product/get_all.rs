use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
use crate::domain::shared::pagination::Page;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self, params: GetAllProductsParams) -> Result<Page<Product>, ProductError> {
        params.filter.validate()?;

        self.logger.info(&format!(
            "Fetching products page {} (size {}) ordered by {}",
            params.page.page, params.page.page_size, params.filter.ordering
        ));

        let page = self.repository.find(&params.filter, params.page).await?;

        self.logger.info(&format!(
            "Found {} products of {}",
            page.items.len(),
            page.total
        ));
        Ok(page)
    }
}

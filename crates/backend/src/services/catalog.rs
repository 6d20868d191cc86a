//! Catalog CRUD services.
//!
//! Validation wrappers around the catalog repositories. Each service checks
//! the entity argument and the referenced parent before delegating; the
//! parent-existence check is a fast-fail courtesy, referential integrity
//! under concurrent deletes belongs to the storage boundary.

use tracing::instrument;

use rustwear_core::{ProductMetricId, ProductModelId};

use super::ServiceError;
use super::validation::{Draft, Lifecycle, ValidationError, validate_draft};
use crate::models::{ProductMetric, ProductModel};
use crate::repository::{ProductMetricRepository, ProductModelRepository, ProductRepository};

/// CRUD service for product models.
pub struct ProductModelService<R, P> {
    models: R,
    products: P,
}

impl<R, P> ProductModelService<R, P>
where
    R: ProductModelRepository,
    P: ProductRepository,
{
    /// Create a new product model service.
    #[must_use]
    pub const fn new(models: R, products: P) -> Self {
        Self { models, products }
    }

    /// Validate and persist a new product model.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Validation` if the model carries a
    /// pre-assigned id, the name is empty, the product reference is absent,
    /// or the referenced product does not exist. Repository failures pass
    /// through unchanged.
    #[instrument(skip(self, model), fields(name = %model.name))]
    pub async fn create(&self, model: ProductModel) -> Result<ProductModel, ServiceError> {
        validate_draft(&model, Lifecycle::Create)?;
        let Some(product_id) = model.product else {
            return Err(ValidationError::MissingParent {
                entity: ProductModel::ENTITY,
                parent: ProductModel::PARENT,
            }
            .into());
        };

        if self.products.read(product_id).await?.is_none() {
            return Err(ValidationError::UnknownParent {
                parent: ProductModel::PARENT,
                id: product_id.as_i32(),
            }
            .into());
        }

        Ok(self.models.create(model).await?)
    }

    /// Fetch a product model by id; absence is `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Repository` if the storage engine fails.
    pub async fn read(&self, id: ProductModelId) -> Result<Option<ProductModel>, ServiceError> {
        Ok(self.models.read(id).await?)
    }

    /// Validate and replace a stored product model.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Validation` if the model has no id, the name
    /// is empty, the product reference is absent, the id has no stored
    /// record, or the referenced product does not exist.
    #[instrument(skip(self, model), fields(id = ?model.id))]
    pub async fn update(&self, model: ProductModel) -> Result<ProductModel, ServiceError> {
        validate_draft(&model, Lifecycle::Update)?;
        let Some(id) = model.id else {
            return Err(ValidationError::MissingId {
                entity: ProductModel::ENTITY,
            }
            .into());
        };
        let Some(product_id) = model.product else {
            return Err(ValidationError::MissingParent {
                entity: ProductModel::ENTITY,
                parent: ProductModel::PARENT,
            }
            .into());
        };

        if self.models.read(id).await?.is_none() {
            return Err(ValidationError::UnknownEntity {
                entity: ProductModel::ENTITY,
                id: id.as_i32(),
            }
            .into());
        }
        if self.products.read(product_id).await?.is_none() {
            return Err(ValidationError::UnknownParent {
                parent: ProductModel::PARENT,
                id: product_id.as_i32(),
            }
            .into());
        }

        Ok(self.models.update(model).await?)
    }

    /// Remove a product model; deleting an unknown id is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Repository` if the storage engine fails.
    pub async fn delete(&self, id: ProductModelId) -> Result<Option<ProductModel>, ServiceError> {
        Ok(self.models.delete(id).await?)
    }
}

/// CRUD service for product metrics.
pub struct ProductMetricService<R, P> {
    metrics: R,
    models: P,
}

impl<R, P> ProductMetricService<R, P>
where
    R: ProductMetricRepository,
    P: ProductModelRepository,
{
    /// Create a new product metric service.
    #[must_use]
    pub const fn new(metrics: R, models: P) -> Self {
        Self { metrics, models }
    }

    /// Validate and persist a new product metric.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Validation` if the metric carries a
    /// pre-assigned id, a required field is empty, the model reference is
    /// absent, or the referenced model does not exist. Repository failures
    /// pass through unchanged.
    #[instrument(skip(self, metric), fields(name = %metric.name))]
    pub async fn create(&self, metric: ProductMetric) -> Result<ProductMetric, ServiceError> {
        validate_draft(&metric, Lifecycle::Create)?;
        let Some(model_id) = metric.product_model else {
            return Err(ValidationError::MissingParent {
                entity: ProductMetric::ENTITY,
                parent: ProductMetric::PARENT,
            }
            .into());
        };

        if self.models.read(model_id).await?.is_none() {
            return Err(ValidationError::UnknownParent {
                parent: ProductMetric::PARENT,
                id: model_id.as_i32(),
            }
            .into());
        }

        Ok(self.metrics.create(metric).await?)
    }

    /// Fetch a product metric by id; absence is `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Repository` if the storage engine fails.
    pub async fn read(&self, id: ProductMetricId) -> Result<Option<ProductMetric>, ServiceError> {
        Ok(self.metrics.read(id).await?)
    }

    /// Validate and replace a stored product metric.
    ///
    /// The own-id check runs before the parent lookup, so an unknown metric
    /// id is reported even when the referenced model is also missing.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Validation` if the metric has no id, a
    /// required field is empty, the model reference is absent, the id has
    /// no stored record, or the referenced model does not exist.
    #[instrument(skip(self, metric), fields(id = ?metric.id))]
    pub async fn update(&self, metric: ProductMetric) -> Result<ProductMetric, ServiceError> {
        validate_draft(&metric, Lifecycle::Update)?;
        let Some(id) = metric.id else {
            return Err(ValidationError::MissingId {
                entity: ProductMetric::ENTITY,
            }
            .into());
        };
        let Some(model_id) = metric.product_model else {
            return Err(ValidationError::MissingParent {
                entity: ProductMetric::ENTITY,
                parent: ProductMetric::PARENT,
            }
            .into());
        };

        if self.metrics.read(id).await?.is_none() {
            return Err(ValidationError::UnknownEntity {
                entity: ProductMetric::ENTITY,
                id: id.as_i32(),
            }
            .into());
        }
        if self.models.read(model_id).await?.is_none() {
            return Err(ValidationError::UnknownParent {
                parent: ProductMetric::PARENT,
                id: model_id.as_i32(),
            }
            .into());
        }

        Ok(self.metrics.update(metric).await?)
    }

    /// Remove a product metric; deleting an unknown id is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Repository` if the storage engine fails.
    pub async fn delete(&self, id: ProductMetricId) -> Result<Option<ProductMetric>, ServiceError> {
        Ok(self.metrics.delete(id).await?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use mockall::predicate::eq;

    use rustwear_core::{CurrencyCode, Price, ProductId};

    use super::*;
    use crate::repository::catalog::{
        MockProductMetricRepository, MockProductModelRepository, MockProductRepository,
    };

    fn hoodie_metric(id: Option<ProductMetricId>) -> ProductMetric {
        ProductMetric {
            id,
            name: "Oversized Hoodie".to_owned(),
            product_model: Some(ProductModelId::new(3)),
            metric_x: "Width".to_owned(),
            metric_y: "Length".to_owned(),
            metric_z: "Sleeve Length".to_owned(),
        }
    }

    fn stored_model(id: ProductModelId) -> ProductModel {
        ProductModel {
            id: Some(id),
            name: "Hoodie".to_owned(),
            product: Some(ProductId::new(1)),
            price: Price::from_minor_units(64_900, CurrencyCode::DKK),
        }
    }

    fn metric_service_with(
        metrics: MockProductMetricRepository,
        models: MockProductModelRepository,
    ) -> ProductMetricService<MockProductMetricRepository, MockProductModelRepository> {
        ProductMetricService::new(metrics, models)
    }

    // =========================================================================
    // ProductMetricService::create
    // =========================================================================

    #[tokio::test]
    async fn create_valid_metric_returns_created_metric_with_id() {
        let expected = hoodie_metric(Some(ProductMetricId::new(1)));

        let mut metrics = MockProductMetricRepository::new();
        let created = expected.clone();
        metrics
            .expect_create()
            .withf(|metric| metric.id.is_none())
            .return_once(move |_| Ok(created));
        let mut models = MockProductModelRepository::new();
        models
            .expect_read()
            .with(eq(ProductModelId::new(3)))
            .return_once(|id| Ok(Some(stored_model(id))));

        let service = metric_service_with(metrics, models);
        let actual = service.create(hoodie_metric(None)).await.unwrap();

        assert_eq!(expected, actual);
    }

    #[tokio::test]
    async fn create_with_preassigned_id_is_rejected() {
        let service = metric_service_with(
            MockProductMetricRepository::new(),
            MockProductModelRepository::new(),
        );

        let result = service
            .create(hoodie_metric(Some(ProductMetricId::new(1))))
            .await;

        assert!(matches!(
            result,
            Err(ServiceError::Validation(
                ValidationError::IdAlreadyAssigned { .. }
            ))
        ));
    }

    #[tokio::test]
    async fn create_with_empty_name_is_rejected() {
        let service = metric_service_with(
            MockProductMetricRepository::new(),
            MockProductModelRepository::new(),
        );

        let mut draft = hoodie_metric(None);
        draft.name = String::new();
        let result = service.create(draft).await;

        assert!(matches!(
            result,
            Err(ServiceError::Validation(ValidationError::MissingField {
                field: "name",
                ..
            }))
        ));
    }

    #[tokio::test]
    async fn create_with_empty_metric_x_is_rejected() {
        let service = metric_service_with(
            MockProductMetricRepository::new(),
            MockProductModelRepository::new(),
        );

        let mut draft = hoodie_metric(None);
        draft.metric_x = String::new();
        let result = service.create(draft).await;

        assert!(matches!(
            result,
            Err(ServiceError::Validation(ValidationError::MissingField {
                field: "metric_x",
                ..
            }))
        ));
    }

    #[tokio::test]
    async fn create_without_model_reference_is_rejected() {
        let service = metric_service_with(
            MockProductMetricRepository::new(),
            MockProductModelRepository::new(),
        );

        let mut draft = hoodie_metric(None);
        draft.product_model = None;
        let result = service.create(draft).await;

        assert!(matches!(
            result,
            Err(ServiceError::Validation(ValidationError::MissingParent {
                ..
            }))
        ));
    }

    #[tokio::test]
    async fn create_with_unknown_model_writes_nothing() {
        let mut metrics = MockProductMetricRepository::new();
        metrics.expect_create().never();
        let mut models = MockProductModelRepository::new();
        models
            .expect_read()
            .with(eq(ProductModelId::new(3)))
            .return_once(|_| Ok(None));

        let service = metric_service_with(metrics, models);
        let result = service.create(hoodie_metric(None)).await;

        assert!(matches!(
            result,
            Err(ServiceError::Validation(ValidationError::UnknownParent {
                id: 3,
                ..
            }))
        ));
    }

    // =========================================================================
    // ProductMetricService::read
    // =========================================================================

    #[tokio::test]
    async fn read_existing_id_returns_metric() {
        let existing_id = ProductMetricId::new(12);
        let expected = hoodie_metric(Some(existing_id));

        let mut metrics = MockProductMetricRepository::new();
        let stored = expected.clone();
        metrics
            .expect_read()
            .with(eq(existing_id))
            .return_once(move |_| Ok(Some(stored)));

        let service = metric_service_with(metrics, MockProductModelRepository::new());
        let actual = service.read(existing_id).await.unwrap();

        assert_eq!(Some(expected), actual);
    }

    #[tokio::test]
    async fn read_unknown_id_returns_none() {
        let mut metrics = MockProductMetricRepository::new();
        metrics.expect_read().return_once(|_| Ok(None));

        let service = metric_service_with(metrics, MockProductModelRepository::new());
        let actual = service.read(ProductMetricId::new(12)).await.unwrap();

        assert_eq!(None, actual);
    }

    // =========================================================================
    // ProductMetricService::update
    // =========================================================================

    #[tokio::test]
    async fn update_valid_metric_returns_updated_metric() {
        let valid = hoodie_metric(Some(ProductMetricId::new(1)));
        let expected = valid.clone();

        let mut metrics = MockProductMetricRepository::new();
        let stored = valid.clone();
        metrics
            .expect_read()
            .with(eq(ProductMetricId::new(1)))
            .return_once(move |_| Ok(Some(stored)));
        let updated = expected.clone();
        metrics.expect_update().return_once(move |_| Ok(updated));
        let mut models = MockProductModelRepository::new();
        models
            .expect_read()
            .with(eq(ProductModelId::new(3)))
            .return_once(|id| Ok(Some(stored_model(id))));

        let service = metric_service_with(metrics, models);
        let actual = service.update(valid).await.unwrap();

        assert_eq!(expected, actual);
    }

    #[tokio::test]
    async fn update_without_id_is_rejected() {
        let service = metric_service_with(
            MockProductMetricRepository::new(),
            MockProductModelRepository::new(),
        );

        let result = service.update(hoodie_metric(None)).await;

        assert!(matches!(
            result,
            Err(ServiceError::Validation(ValidationError::MissingId { .. }))
        ));
    }

    #[tokio::test]
    async fn update_unknown_id_is_rejected_before_model_lookup() {
        let mut metrics = MockProductMetricRepository::new();
        metrics
            .expect_read()
            .with(eq(ProductMetricId::new(1)))
            .return_once(|_| Ok(None));
        metrics.expect_update().never();
        let mut models = MockProductModelRepository::new();
        models.expect_read().never();

        let service = metric_service_with(metrics, models);
        let result = service
            .update(hoodie_metric(Some(ProductMetricId::new(1))))
            .await;

        assert!(matches!(
            result,
            Err(ServiceError::Validation(ValidationError::UnknownEntity {
                id: 1,
                ..
            }))
        ));
    }

    #[tokio::test]
    async fn update_with_empty_name_is_rejected() {
        let service = metric_service_with(
            MockProductMetricRepository::new(),
            MockProductModelRepository::new(),
        );

        let mut draft = hoodie_metric(Some(ProductMetricId::new(1)));
        draft.name = String::new();
        let result = service.update(draft).await;

        assert!(matches!(
            result,
            Err(ServiceError::Validation(ValidationError::MissingField {
                field: "name",
                ..
            }))
        ));
    }

    #[tokio::test]
    async fn update_without_model_reference_is_rejected() {
        let service = metric_service_with(
            MockProductMetricRepository::new(),
            MockProductModelRepository::new(),
        );

        let mut draft = hoodie_metric(Some(ProductMetricId::new(1)));
        draft.product_model = None;
        let result = service.update(draft).await;

        assert!(matches!(
            result,
            Err(ServiceError::Validation(ValidationError::MissingParent {
                ..
            }))
        ));
    }

    #[tokio::test]
    async fn update_with_unknown_model_writes_nothing() {
        let mut metrics = MockProductMetricRepository::new();
        let stored = hoodie_metric(Some(ProductMetricId::new(1)));
        metrics
            .expect_read()
            .return_once(move |_| Ok(Some(stored)));
        metrics.expect_update().never();
        let mut models = MockProductModelRepository::new();
        models
            .expect_read()
            .with(eq(ProductModelId::new(3)))
            .return_once(|_| Ok(None));

        let service = metric_service_with(metrics, models);
        let result = service
            .update(hoodie_metric(Some(ProductMetricId::new(1))))
            .await;

        assert!(matches!(
            result,
            Err(ServiceError::Validation(ValidationError::UnknownParent {
                id: 3,
                ..
            }))
        ));
    }

    // =========================================================================
    // ProductMetricService::delete
    // =========================================================================

    #[tokio::test]
    async fn delete_existing_id_returns_deleted_metric() {
        let existing_id = ProductMetricId::new(12);
        let expected = hoodie_metric(Some(existing_id));

        let mut metrics = MockProductMetricRepository::new();
        let deleted = expected.clone();
        metrics
            .expect_delete()
            .with(eq(existing_id))
            .return_once(move |_| Ok(Some(deleted)));

        let service = metric_service_with(metrics, MockProductModelRepository::new());
        let actual = service.delete(existing_id).await.unwrap();

        assert_eq!(Some(expected), actual);
    }

    #[tokio::test]
    async fn delete_unknown_id_returns_none() {
        let mut metrics = MockProductMetricRepository::new();
        metrics.expect_delete().return_once(|_| Ok(None));

        let service = metric_service_with(metrics, MockProductModelRepository::new());
        let actual = service.delete(ProductMetricId::new(12)).await.unwrap();

        assert_eq!(None, actual);
    }

    // =========================================================================
    // ProductModelService
    // =========================================================================

    fn hoodie_model(id: Option<ProductModelId>) -> ProductModel {
        ProductModel {
            id,
            name: "Hoodie".to_owned(),
            product: Some(ProductId::new(1)),
            price: Price::from_minor_units(64_900, CurrencyCode::DKK),
        }
    }

    #[tokio::test]
    async fn create_valid_model_returns_created_model_with_id() {
        let expected = hoodie_model(Some(ProductModelId::new(3)));

        let mut models = MockProductModelRepository::new();
        let created = expected.clone();
        models.expect_create().return_once(move |_| Ok(created));
        let mut products = MockProductRepository::new();
        products
            .expect_read()
            .with(eq(ProductId::new(1)))
            .return_once(|id| {
                Ok(Some(crate::models::Product {
                    id: Some(id),
                    name: "Hoodies".to_owned(),
                }))
            });

        let service = ProductModelService::new(models, products);
        let actual = service.create(hoodie_model(None)).await.unwrap();

        assert_eq!(expected, actual);
    }

    #[tokio::test]
    async fn create_model_with_unknown_product_writes_nothing() {
        let mut models = MockProductModelRepository::new();
        models.expect_create().never();
        let mut products = MockProductRepository::new();
        products.expect_read().return_once(|_| Ok(None));

        let service = ProductModelService::new(models, products);
        let result = service.create(hoodie_model(None)).await;

        assert!(matches!(
            result,
            Err(ServiceError::Validation(ValidationError::UnknownParent {
                id: 1,
                ..
            }))
        ));
    }

    #[tokio::test]
    async fn update_model_with_unknown_id_is_rejected_before_product_lookup() {
        let mut models = MockProductModelRepository::new();
        models.expect_read().return_once(|_| Ok(None));
        models.expect_update().never();
        let mut products = MockProductRepository::new();
        products.expect_read().never();

        let service = ProductModelService::new(models, products);
        let result = service
            .update(hoodie_model(Some(ProductModelId::new(3))))
            .await;

        assert!(matches!(
            result,
            Err(ServiceError::Validation(ValidationError::UnknownEntity {
                id: 3,
                ..
            }))
        ));
    }

    #[tokio::test]
    async fn delete_unknown_model_returns_none() {
        let mut models = MockProductModelRepository::new();
        models.expect_delete().return_once(|_| Ok(None));

        let service = ProductModelService::new(models, MockProductRepository::new());
        let actual = service.delete(ProductModelId::new(3)).await.unwrap();

        assert_eq!(None, actual);
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use async_graphql::connection::EmptyFields;
use async_graphql::{Object, ObjectType, OutputType, TypeName};

use crate::list::{List, PageInfo};

/// Names the GraphQL type of a list from the type of its items.
pub trait ListNameType: Send + Sync {
    /// Returns the list type name.
    fn type_name<T: OutputType>() -> String;
}

/// Names lists `<Item>List`, for example `ShipList`.
#[derive(Debug, Clone, Copy)]
pub struct DefaultListName;

impl ListNameType for DefaultListName {
    fn type_name<T: OutputType>() -> String {
        format!("{}List", T::type_name())
    }
}

/// GraphQL object of a paginated list with `items`, `pageInfo` and `totalCount` fields.
///
/// The fields of `F` are merged into the object, which allows list types with extra fields.
pub struct ListObject<T, F = EmptyFields, N = DefaultListName>
where
    T: OutputType,
    F: ObjectType,
    N: ListNameType,
{
    list: List<T>,
    additional_fields: F,
    _name: PhantomData<N>,
}

impl<T: OutputType> ListObject<T> {
    /// Exposes a list without additional fields.
    pub fn new(list: List<T>) -> Self {
        Self::with_additional_fields(list, EmptyFields)
    }
}

impl<T, F, N> ListObject<T, F, N>
where
    T: OutputType,
    F: ObjectType,
    N: ListNameType,
{
    /// Exposes a list together with the fields of `additional_fields`.
    pub fn with_additional_fields(list: List<T>, additional_fields: F) -> Self {
        Self {
            list,
            additional_fields,
            _name: PhantomData,
        }
    }

    /// Returns the wrapped list.
    pub fn list(&self) -> &List<T> {
        &self.list
    }

    /// Unwraps the list.
    pub fn into_inner(self) -> List<T> {
        self.list
    }
}

impl<T: OutputType> From<List<T>> for ListObject<T> {
    fn from(list: List<T>) -> Self {
        Self::new(list)
    }
}

impl<T, F, N> fmt::Debug for ListObject<T, F, N>
where
    T: OutputType + fmt::Debug,
    F: ObjectType,
    N: ListNameType,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListObject")
            .field("list", &self.list)
            .finish_non_exhaustive()
    }
}

#[Object(name_type)]
impl<T, F, N> ListObject<T, F, N>
where
    T: OutputType,
    F: ObjectType,
    N: ListNameType,
{
    /// Items of the list.
    async fn items(&self) -> &[T] {
        &self.list.items
    }

    /// Information to aid in pagination.
    async fn page_info(&self) -> &PageInfo {
        &self.list.page_info
    }

    /// Count of all list items.
    async fn total_count(&self) -> usize {
        self.list.total_count
    }

    #[graphql(flatten)]
    async fn additional_fields(&self) -> &F {
        &self.additional_fields
    }
}

impl<T, F, N> TypeName for ListObject<T, F, N>
where
    T: OutputType,
    F: ObjectType,
    N: ListNameType,
{
    fn type_name() -> Cow<'static, str> {
        N::type_name::<T>().into()
    }
}

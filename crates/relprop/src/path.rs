use crate::{AttributeResolver, PropertyAccessor, PropertyResolver};
use relprop_core::{
    stmt::{Entity, Type, Value},
    EntityType, Error, Result,
};

use std::{fmt, str::FromStr};

/// A dotted property expression such as `calendar.startDate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyPath {
    segments: Vec<String>,
}

/// A [`PropertyPath`] with every segment resolved to an accessor.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPath {
    path: PropertyPath,
    accessors: Vec<PropertyAccessor>,
    ty: Type,
}

impl PropertyPath {
    pub fn parse(src: &str) -> Result<Self> {
        if src.is_empty() {
            return Err(Error::invalid_property_path(src, "path is empty"));
        }

        let segments = src
            .split('.')
            .map(|segment| {
                if segment.is_empty() {
                    Err(Error::invalid_property_path(src, "empty segment"))
                } else {
                    Ok(segment.to_string())
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { segments })
    }

    pub fn segments(&self) -> impl ExactSizeIterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    /// Resolves each segment against the entity type the previous segment
    /// produces, starting at `root`.
    ///
    /// Accessors are not invoked; the next entity type comes from each
    /// accessor's return type. Every segment but the last must produce an
    /// entity or a list of entities.
    pub fn resolve<R: AttributeResolver>(
        &self,
        resolver: &PropertyResolver<R>,
        root: &EntityType,
    ) -> Result<ResolvedPath> {
        let mut accessors = Vec::with_capacity(self.segments.len());
        let mut entity_type = root.clone();
        let mut flattens = false;

        for (i, segment) in self.segments.iter().enumerate() {
            let accessor = resolver.resolve(&entity_type, segment)?;

            if i + 1 < self.segments.len() {
                let ty = accessor.return_type();
                let Some(next) = ty.entity_type() else {
                    return Err(Error::invalid_property_path(
                        self.to_string(),
                        format!("`{entity_type}.{segment}` does not produce an entity"),
                    ));
                };

                flattens |= ty.is_list();
                entity_type = next.clone();
            }

            accessors.push(accessor);
        }

        let ty = match accessors.last() {
            Some(last) if flattens && !last.return_type().is_list() => {
                Type::list(last.return_type().clone())
            }
            Some(last) => last.return_type().clone(),
            None => Type::Unknown,
        };

        Ok(ResolvedPath {
            path: self.clone(),
            accessors,
            ty,
        })
    }
}

impl ResolvedPath {
    pub fn path(&self) -> &PropertyPath {
        &self.path
    }

    pub fn accessors(&self) -> &[PropertyAccessor] {
        &self.accessors
    }

    /// The type `invoke` produces. Paths that pass through a collection
    /// produce a list.
    pub fn return_type(&self) -> &Type {
        &self.ty
    }

    /// Evaluates the path on `entity`.
    ///
    /// A null along the way makes the result null. Collections along the way
    /// are flattened: the rest of the path is evaluated on every item and the
    /// results are concatenated, dropping nulls.
    pub fn invoke(&self, entity: &Entity) -> Result<Value> {
        invoke(&self.path, &self.accessors, entity)
    }
}

fn invoke(path: &PropertyPath, accessors: &[PropertyAccessor], entity: &Entity) -> Result<Value> {
    let Some((accessor, rest)) = accessors.split_first() else {
        return Ok(Value::Entity(entity.clone()));
    };

    let value = accessor.invoke(entity)?;

    if rest.is_empty() {
        Ok(value)
    } else {
        follow(path, rest, value)
    }
}

fn follow(path: &PropertyPath, rest: &[PropertyAccessor], value: Value) -> Result<Value> {
    match value {
        Value::Null => Ok(Value::Null),
        Value::Entity(entity) => invoke(path, rest, &entity),
        Value::List(items) => {
            let mut flattened = vec![];

            for item in items {
                match follow(path, rest, item)? {
                    Value::Null => {}
                    Value::List(values) => flattened.extend(values),
                    value => flattened.push(value),
                }
            }

            Ok(Value::List(flattened))
        }
        value => Err(Error::invalid_property_path(
            path.to_string(),
            format!("expected an entity, got {value}"),
        )),
    }
}

impl FromStr for PropertyPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

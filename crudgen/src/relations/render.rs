//! Accessor source fragments

use super::RelationshipDescriptor;

/// Render one relation accessor method
///
/// `namespace` qualifies the related class and is used verbatim.
///
/// # Examples
///
/// ```
/// # use crudgen::relations::render_accessor;
/// # use crudgen::{RelationKind, RelationshipDescriptor};
/// let descriptor = RelationshipDescriptor {
///     kind: RelationKind::BelongsTo,
///     related_table: "customers".into(),
///     related_entity_name: "Customer".into(),
///     accessor_name: "customer".into(),
///     foreign_key_column: "customer_id".into(),
///     owner_key_column: "id".into(),
/// };
/// let source = render_accessor(&descriptor, "App\\Models");
/// assert!(source.contains("public function customer()"));
/// assert!(source.contains(r"$this->belongsTo('App\Models\Customer', 'customer_id', 'id')"));
/// ```
#[must_use]
pub fn render_accessor(descriptor: &RelationshipDescriptor, namespace: &str) -> String {
    format!(
        r"
    /**
     * @return \Illuminate\Database\Eloquent\Relations\{class}
     */
    public function {accessor}()
    {{
        return $this->{method}('{namespace}\{related}', '{foreign_key}', '{owner_key}');
    }}
    ",
        class = descriptor.kind.class(),
        accessor = descriptor.accessor_name,
        method = descriptor.kind.method(),
        related = descriptor.related_entity_name,
        foreign_key = descriptor.foreign_key_column,
        owner_key = descriptor.owner_key_column,
    )
}

/// Render every accessor, concatenated in order
#[must_use]
pub fn render_accessors(descriptors: &[RelationshipDescriptor], namespace: &str) -> String {
    descriptors
        .iter()
        .map(|descriptor| render_accessor(descriptor, namespace))
        .collect()
}

pub mod routes;

/// Route paths of the application
pub mod paths {
    use contracts::domain::a001_pedido::PedidoId;
    use contracts::domain::common::AggregateId;

    pub const LOGIN: &str = "/";
    pub const LISTA: &str = "/lista-pedidos";
    pub const NUEVO: &str = "/nuevo-pedido";
    pub const EDITAR: &str = "/editar-pedido";

    /// Edit route for one order
    pub fn editar(id: &PedidoId) -> String {
        format!("{}/{}", EDITAR, urlencoding::encode(&id.as_string()))
    }

}

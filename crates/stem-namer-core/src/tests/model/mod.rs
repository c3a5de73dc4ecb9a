mod onnx;
mod score_matrix;
